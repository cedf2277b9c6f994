//! Gesture scripts for driving an [`EditorSession`] without a canvas.
//!
//! A script lists the tables it uses and the gestures to replay, in order:
//!
//! ```json
//! {
//!   "tables": [
//!     { "name": "orders", "columns": { "id": "integer", "customer_id": "integer", "amount": "numeric" } },
//!     { "name": "customers", "columns": { "id": "integer", "name": "text" } }
//!   ],
//!   "actions": [
//!     { "addTable": { "table": "orders" } },
//!     { "addTable": { "table": "customers" } },
//!     { "connect": { "source": "0-customer_id-source", "target": "1-id-target" } },
//!     { "configure": { "table": "orders", "field": "amount",
//!                      "config": { "aggregation": { "type": "SUM", "alias": "total_amount" } } } }
//!   ]
//! }
//! ```
//!
//! Connections the canvas would refuse are skipped, the same way the editor
//! ignores them.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{FieldConfig, FieldKey, Table};
use crate::session::EditorSession;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse script: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Table not found: {0}")]
    UnknownTable(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub tables: Vec<ScriptTable>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// A table definition in catalog form: column name to database type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptTable {
    pub name: String,
    #[serde(default)]
    pub columns: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    AddTable {
        table: String,
    },
    Connect {
        source: String,
        target: String,
    },
    Configure {
        table: String,
        field: String,
        #[serde(default)]
        config: FieldConfig,
    },
}

/// Counts from a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub nodes_added: usize,
    pub connections_added: usize,
    pub connections_skipped: usize,
    pub fields_configured: usize,
}

impl Script {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Typed tables declared by the script.
    pub fn declared_tables(&self) -> Vec<Table> {
        self.tables
            .iter()
            .map(|t| Table::from_columns(t.name.clone(), &t.columns))
            .collect()
    }

    /// Names passed to `addTable` that the script does not declare.
    pub fn undeclared_tables(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = Vec::new();
        for action in &self.actions {
            if let Action::AddTable { table } = action {
                let declared = self.tables.iter().any(|t| &t.name == table);
                if !declared && !missing.contains(&table.as_str()) {
                    missing.push(table);
                }
            }
        }
        missing
    }

    /// Apply every action to `session`.
    ///
    /// `addTable` resolves names against the script's own tables first,
    /// then `catalog`.
    pub fn replay(
        &self,
        session: &mut EditorSession,
        catalog: &[Table],
    ) -> Result<ReplaySummary, ScriptError> {
        let declared = self.declared_tables();
        let mut summary = ReplaySummary::default();

        for action in &self.actions {
            match action {
                Action::AddTable { table } => {
                    let found = declared
                        .iter()
                        .chain(catalog)
                        .find(|t| &t.name == table)
                        .ok_or_else(|| ScriptError::UnknownTable(table.clone()))?;
                    session.add_table(found.clone());
                    summary.nodes_added += 1;
                }
                Action::Connect { source, target } => {
                    if session.connect(source, target).is_some() {
                        summary.connections_added += 1;
                    } else {
                        summary.connections_skipped += 1;
                    }
                }
                Action::Configure {
                    table,
                    field,
                    config,
                } => {
                    let mut panel = session.open_field(FieldKey::new(table, field));
                    panel.set_draft(config.clone());
                    session.save_field(panel);
                    summary.fields_configured += 1;
                }
            }
        }

        Ok(summary)
    }
}
