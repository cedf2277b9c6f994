//! SchemaCatalog trait definition.

use async_trait::async_trait;

use super::error::CatalogResult;
use crate::model::Table;

/// Source of table metadata for the sidebar.
///
/// # Example
///
/// ```ignore
/// use erdq::catalog::{HttpSchemaCatalog, SchemaCatalog};
///
/// let catalog = HttpSchemaCatalog::new("https://data.example.com");
/// let tables = catalog.fetch_tables("ds-42").await?;
/// ```
#[async_trait]
pub trait SchemaCatalog: Send + Sync {
    /// Fetch all tables of a data source, with typed fields.
    async fn fetch_tables(&self, data_source_id: &str) -> CatalogResult<Vec<Table>>;
}
