//! In-memory graph of table nodes and join connections.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::handle::HandleRef;
use super::layout::{GridLayout, Position};
use crate::model::Table;

/// Identifier of a node on the canvas.
///
/// Issued by [`NodeIdGenerator`]; values are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic source of node ids.
#[derive(Debug, Clone, Default)]
pub struct NodeIdGenerator {
    next: u64,
}

impl NodeIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

/// Identifier of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A table placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: NodeId,
    pub table: Table,
    pub position: Position,
}

impl DiagramNode {
    /// The node's label: its table name.
    pub fn label(&self) -> &str {
        &self.table.name
    }
}

/// A directed edge drawn from a field handle on one node to a field handle
/// on another.
///
/// Handles are kept as the raw ids the canvas reported; join inference
/// resolves them to field ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: ConnectionId,
    pub source_node_id: NodeId,
    pub source_handle: String,
    pub target_node_id: NodeId,
    pub target_handle: String,
}

/// Why a connect gesture was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    #[error("malformed connection handle: {0}")]
    MalformedHandle(String),

    #[error("node {0} is not on the canvas")]
    UnknownNode(NodeId),

    #[error("node {node} has no field '{field}'")]
    UnknownField { node: NodeId, field: String },
}

/// Owns the nodes and connections on the canvas.
///
/// Nodes and connections can only be added. Node order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct DiagramStore {
    nodes: Vec<DiagramNode>,
    connections: Vec<Connection>,
    ids: NodeIdGenerator,
    layout: GridLayout,
}

impl DiagramStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: GridLayout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Place a table on the canvas and return its node id.
    ///
    /// The same table may be added any number of times; each call creates
    /// an independent node.
    pub fn add_table(&mut self, table: Table) -> NodeId {
        let id = self.ids.next_id();
        let position = self.layout.position_for(id.0);
        log::debug!("adding table '{}' as node {} at {:?}", table.name, id, position);
        self.nodes.push(DiagramNode {
            id,
            table,
            position,
        });
        id
    }

    /// Connect two field handles.
    ///
    /// Both handles must be canonical handle ids naming nodes on the canvas
    /// and fields that exist on those nodes' tables.
    pub fn add_connection(
        &mut self,
        source_handle: &str,
        target_handle: &str,
    ) -> Result<ConnectionId, ConnectionError> {
        let source = self.resolve_handle(source_handle)?;
        let target = self.resolve_handle(target_handle)?;

        let id = ConnectionId::new();
        self.connections.push(Connection {
            id,
            source_node_id: source.node,
            source_handle: source_handle.to_string(),
            target_node_id: target.node,
            target_handle: target_handle.to_string(),
        });
        Ok(id)
    }

    /// Record an edge exactly as the canvas reported it.
    ///
    /// Only the node ids are validated; the handles are stored verbatim and
    /// interpreted later by join inference.
    pub fn insert_connection(
        &mut self,
        source_node_id: NodeId,
        source_handle: impl Into<String>,
        target_node_id: NodeId,
        target_handle: impl Into<String>,
    ) -> Result<ConnectionId, ConnectionError> {
        for node in [source_node_id, target_node_id] {
            if self.node(node).is_none() {
                return Err(ConnectionError::UnknownNode(node));
            }
        }

        let id = ConnectionId::new();
        self.connections.push(Connection {
            id,
            source_node_id,
            source_handle: source_handle.into(),
            target_node_id,
            target_handle: target_handle.into(),
        });
        Ok(id)
    }

    fn resolve_handle(&self, handle: &str) -> Result<HandleRef, ConnectionError> {
        // Join inference matches the exact `{node}-` prefix, so the id must
        // be canonical.
        let parsed = HandleRef::parse(handle)
            .filter(|parsed| parsed.encode() == handle)
            .ok_or_else(|| ConnectionError::MalformedHandle(handle.to_string()))?;
        let node = self
            .node(parsed.node)
            .ok_or(ConnectionError::UnknownNode(parsed.node))?;
        if node.table.field(&parsed.field).is_none() {
            return Err(ConnectionError::UnknownField {
                node: parsed.node,
                field: parsed.field,
            });
        }
        Ok(parsed)
    }

    /// Table names of all nodes, in insertion order, duplicates included.
    pub fn table_names(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.label().to_string()).collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
