//! Schema catalog client.
//!
//! ```text
//! ┌──────────────────────────────┐      GET get-db-structure
//! │ SchemaSidebar                │ ───────────────────────────▶ data service
//! │  select_data_source()        │
//! │  (aborts stale fetches)      │ ◀─── { tables: { t: { columns: { c: type } } } }
//! └──────────────────────────────┘
//!            │ Vec<Table>
//!            ▼
//!       add_table() on the canvas
//! ```

mod error;
mod http;
mod provider;
mod sidebar;
mod types;

pub use error::{CatalogError, CatalogResult};
pub use http::HttpSchemaCatalog;
pub use provider::SchemaCatalog;
pub use sidebar::{SchemaSidebar, SidebarState};
pub use types::{DbStructure, TableStructure};
