//! Join inference: symmetric reference-table entries derived from the
//! directed connections on the canvas.

mod inference;
mod types;

pub use inference::{infer_joins, infer_reference_tables};
pub use types::{
    DropReason, DroppedConnection, JoinDescriptor, JoinInference, JoinType, ReferenceTableEntry,
};
