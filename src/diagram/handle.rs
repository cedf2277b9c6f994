//! Connection handle ids.
//!
//! Every field row on a table node exposes two handles whose ids encode
//! the owning node and the field:
//!
//! ```text
//! {nodeId}-{fieldId}-source
//! {nodeId}-{fieldId}-target
//! ```
//!
//! Field ids may themselves contain `-`, so parsing anchors on the numeric
//! node prefix and the side suffix.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::store::NodeId;

static HANDLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)-(.+)-(source|target)$").expect("valid handle regex"));

const SOURCE_SUFFIX: &str = "-source";
const TARGET_SUFFIX: &str = "-target";

/// Which end of a connection a handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    Source,
    Target,
}

impl HandleSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandleSide::Source => "source",
            HandleSide::Target => "target",
        }
    }
}

/// A parsed handle id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandleRef {
    pub node: NodeId,
    pub field: String,
    pub side: HandleSide,
}

impl HandleRef {
    pub fn new(node: NodeId, field: impl Into<String>, side: HandleSide) -> Self {
        Self {
            node,
            field: field.into(),
            side,
        }
    }

    pub fn source(node: NodeId, field: impl Into<String>) -> Self {
        Self::new(node, field, HandleSide::Source)
    }

    pub fn target(node: NodeId, field: impl Into<String>) -> Self {
        Self::new(node, field, HandleSide::Target)
    }

    /// Parse a handle id. Returns `None` for anything not of the form
    /// `{nodeId}-{fieldId}-{source|target}`.
    pub fn parse(handle: &str) -> Option<Self> {
        let caps = HANDLE_RE.captures(handle)?;
        let node = caps[1].parse::<u64>().ok()?;
        let side = match &caps[3] {
            "source" => HandleSide::Source,
            _ => HandleSide::Target,
        };
        Some(Self::new(NodeId(node), &caps[2], side))
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HandleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.node, self.field, self.side.as_str())
    }
}

/// Resolve the field id carried by `handle`, given the node it belongs to.
///
/// Strips exactly the `"{node}-"` prefix and a trailing `-source` or
/// `-target`. Yields `None` when either is missing or nothing is left.
pub fn field_id_from_handle(node: NodeId, handle: &str) -> Option<&str> {
    let prefix = format!("{}-", node);
    let rest = handle.strip_prefix(prefix.as_str())?;
    let field = rest
        .strip_suffix(SOURCE_SUFFIX)
        .or_else(|| rest.strip_suffix(TARGET_SUFFIX))?;
    (!field.is_empty()).then_some(field)
}
