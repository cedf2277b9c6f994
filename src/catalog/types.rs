//! Wire format of the `get-db-structure` endpoint.
//!
//! ```json
//! { "tables": { "orders": { "columns": { "id": "integer", "amount": "numeric" } } } }
//! ```
//!
//! Table and column order follow the document order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::Table;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStructure {
    #[serde(default)]
    pub tables: IndexMap<String, TableStructure>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStructure {
    /// Column name to database type
    #[serde(default)]
    pub columns: IndexMap<String, String>,
}

impl DbStructure {
    /// Convert the catalog document into typed tables.
    pub fn into_tables(self) -> Vec<Table> {
        self.tables
            .into_iter()
            .map(|(name, structure)| Table::from_columns(name, structure.columns))
            .collect()
    }
}
