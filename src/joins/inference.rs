//! Reference-table inference from canvas connections.
//!
//! Connections on the canvas are directional, but a join is not: an edge
//! from `A.x` to `B.y` yields one entry for each side.
//!
//! ```text
//! orders.customer_id ──▶ customers.id
//!
//!   { name: orders,    join: { table: customers, leftColumn: customer_id, rightColumn: id } }
//!   { name: customers, join: { table: orders,    leftColumn: id, rightColumn: customer_id } }
//! ```
//!
//! Every table on the canvas is guaranteed at least one entry; tables with
//! no usable connection get a bare entry after all edges are processed.

use super::types::{
    DropReason, DroppedConnection, JoinDescriptor, JoinInference, ReferenceTableEntry,
};
use crate::diagram::{field_id_from_handle, Connection, DiagramNode, DiagramStore, NodeId};

/// Infer reference tables and collect the connections that were dropped.
pub fn infer_joins(nodes: &[DiagramNode], connections: &[Connection]) -> JoinInference {
    let mut inference = JoinInference::default();

    for connection in connections {
        match resolve(nodes, connection) {
            Ok(edge) => {
                inference.entries.push(ReferenceTableEntry::joined(
                    edge.source_table,
                    JoinDescriptor::new(edge.target_table, edge.source_field, edge.target_field),
                ));
                inference.entries.push(ReferenceTableEntry::joined(
                    edge.target_table,
                    JoinDescriptor::new(edge.source_table, edge.target_field, edge.source_field),
                ));
            }
            Err(reason) => {
                log::warn!(
                    "dropping connection {} from join inference: {}",
                    connection.id,
                    reason
                );
                inference.dropped.push(DroppedConnection {
                    connection_id: connection.id,
                    reason,
                });
            }
        }
    }

    for node in nodes {
        let name = node.label();
        if !inference.entries.iter().any(|e| e.name == name) {
            inference.entries.push(ReferenceTableEntry::bare(name));
        }
    }

    inference
}

/// Reference tables for the current diagram.
pub fn infer_reference_tables(store: &DiagramStore) -> Vec<ReferenceTableEntry> {
    infer_joins(store.nodes(), store.connections()).entries
}

struct ResolvedEdge<'a> {
    source_table: &'a str,
    source_field: &'a str,
    target_table: &'a str,
    target_field: &'a str,
}

fn resolve<'a>(
    nodes: &'a [DiagramNode],
    connection: &'a Connection,
) -> Result<ResolvedEdge<'a>, DropReason> {
    let source_table = table_name(nodes, connection.source_node_id)?;
    let target_table = table_name(nodes, connection.target_node_id)?;
    let source_field = field_id_from_handle(connection.source_node_id, &connection.source_handle)
        .ok_or_else(|| DropReason::MalformedHandle(connection.source_handle.clone()))?;
    let target_field = field_id_from_handle(connection.target_node_id, &connection.target_handle)
        .ok_or_else(|| DropReason::MalformedHandle(connection.target_handle.clone()))?;

    Ok(ResolvedEdge {
        source_table,
        source_field,
        target_table,
        target_field,
    })
}

fn table_name(nodes: &[DiagramNode], id: NodeId) -> Result<&str, DropReason> {
    nodes
        .iter()
        .find(|n| n.id == id)
        .map(|n| n.label())
        .ok_or(DropReason::UnknownNode(id))
}
