// src/model/table.rs
use serde::{Deserialize, Serialize};

use crate::model::field_type::FieldType;

/// A catalog table that can be placed on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    /// Fields in catalog column order
    pub fields: Vec<Field>,
}

/// A column of a table, typed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Handle id on the canvas (same as the column name)
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
}

impl Field {
    /// Build a field from a catalog column name and database type.
    ///
    /// A column named exactly `id` is the primary key; any other column
    /// ending in `_id` is a foreign key.
    pub fn from_column(name: impl Into<String>, db_type: &str) -> Self {
        let name = name.into();
        let field_type = FieldType::from_column(&name, db_type);
        let is_primary_key = name == "id";
        let is_foreign_key = !is_primary_key && name.ends_with("_id");

        Self {
            id: name.clone(),
            name,
            field_type,
            is_primary_key,
            is_foreign_key,
        }
    }
}

impl Table {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Build a table from `(column name, database type)` pairs.
    pub fn from_columns<I, K, V>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let fields = columns
            .into_iter()
            .map(|(col, db_type)| Field::from_column(col, db_type.as_ref()))
            .collect();
        Self::new(name, fields)
    }

    /// Look up a field by its handle id.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_primary_key)
    }
}
