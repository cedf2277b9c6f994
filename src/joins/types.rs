//! Reference-table entries emitted by join inference.

use serde::{Deserialize, Serialize};

use crate::diagram::{ConnectionId, NodeId};

/// How a reference table is brought into the query. The execution service
/// only understands `"combine"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinType {
    #[default]
    Combine,
}

/// Equi-join from the entry's table to `table` on
/// `leftColumn = rightColumn`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinDescriptor {
    pub table: String,
    pub left_column: String,
    pub right_column: String,
}

impl JoinDescriptor {
    pub fn new(
        table: impl Into<String>,
        left_column: impl Into<String>,
        right_column: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            left_column: left_column.into(),
            right_column: right_column.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTableEntry {
    pub name: String,
    pub join_type: JoinType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join: Option<JoinDescriptor>,
}

impl ReferenceTableEntry {
    /// An entry with no join.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            join_type: JoinType::Combine,
            join: None,
        }
    }

    pub fn joined(name: impl Into<String>, join: JoinDescriptor) -> Self {
        Self {
            name: name.into(),
            join_type: JoinType::Combine,
            join: Some(join),
        }
    }
}

/// Why a connection contributed nothing to the reference tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropReason {
    /// The connection names a node that is not on the canvas.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    /// A handle could not be resolved to a field id.
    #[error("malformed handle '{0}'")]
    MalformedHandle(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedConnection {
    pub connection_id: ConnectionId,
    pub reason: DropReason,
}

/// Output of join inference: the reference tables plus the connections
/// that were skipped while building them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinInference {
    pub entries: Vec<ReferenceTableEntry>,
    pub dropped: Vec<DroppedConnection>,
}
