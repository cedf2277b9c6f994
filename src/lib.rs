//! # erdq
//!
//! Compiles entity-relationship canvas diagrams into canonical query
//! specifications.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          Schema Catalog (tables + typed fields)          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [add table / connect]
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │      DiagramStore        │   │    FieldConfigStore      │
//! │  (nodes + connections)   │   │ (directives per field)   │
//! └──────────────────────────┘   └──────────────────────────┘
//!              │                              │
//!              ▼ [join inference]             │ [snapshot]
//! ┌──────────────────────────┐                │
//! │    ReferenceTableEntry   │                │
//! └──────────────────────────┘                │
//!              │                              │
//!              └──────────────┬───────────────┘
//!                             ▼ [compile]
//! ┌─────────────────────────────────────────────────────────┐
//! │                  QuerySpecification                      │
//! └─────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼ [export]
//!              clipboard · file · create-query API
//! ```

pub mod catalog;
pub mod compile;
pub mod config;
pub mod diagram;
pub mod export;
pub mod fields;
pub mod joins;
pub mod model;
pub mod query;
pub mod script;
pub mod session;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::compile::{compile, compile_diagram, CompileOutput};
    pub use crate::diagram::{Connection, DiagramStore, HandleRef, NodeId};
    pub use crate::fields::{ConfigPanel, FieldConfigStore, FieldConfigs};
    pub use crate::joins::{infer_joins, infer_reference_tables, JoinDescriptor, ReferenceTableEntry};
    pub use crate::model::{
        Aggregation, AggregationFunction, Calculation, Field, FieldConfig, FieldKey, FieldType,
        Filter, FilterOperator, SortBy, SortDirection, Table,
    };
    pub use crate::query::{QueryEnvelope, QuerySpecification};
    pub use crate::session::{EditorSession, Notification, NotificationLevel};
}

// Also export at crate root for convenience
pub use compile::compile;
pub use query::QuerySpecification;
pub use session::EditorSession;
