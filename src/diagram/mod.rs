//! The canvas graph: table nodes and the connections drawn between their
//! fields.

pub mod handle;
mod layout;
mod store;

pub use handle::{field_id_from_handle, HandleRef, HandleSide};
pub use layout::{GridLayout, Position, GRID_COLUMNS};
pub use store::{
    Connection, ConnectionError, ConnectionId, DiagramNode, DiagramStore, NodeId,
    NodeIdGenerator,
};
