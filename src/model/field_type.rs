//! Field types and their canvas presentation.

use serde::{Deserialize, Serialize};

/// Type of a field as shown on a table node.
///
/// Derived heuristically from catalog column metadata (see
/// [`FieldType::from_column`]). `Relation` is never inferred; it exists for
/// fields that are explicitly marked as relationship handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Date,
    Boolean,
    Relation,
}

/// Column type fragments that classify a column as numeric.
const NUMERIC_TYPES: &[&str] = &["int", "decimal", "numeric", "real", "double"];

impl FieldType {
    /// Classify a catalog column.
    ///
    /// Rules are applied in order, case-insensitively:
    /// 1. column name containing `email` → `Email`
    /// 2. `date`/`timestamp` column types → `Date`
    /// 3. `bool` column types → `Boolean`
    /// 4. `int`/`decimal`/`numeric`/`real`/`double` column types → `Number`
    /// 5. anything else → `Text`
    pub fn from_column(name: &str, db_type: &str) -> Self {
        let name = name.to_lowercase();
        let db_type = db_type.to_lowercase();

        if name.contains("email") {
            FieldType::Email
        } else if db_type.contains("date") || db_type.contains("timestamp") {
            FieldType::Date
        } else if db_type.contains("bool") {
            FieldType::Boolean
        } else if NUMERIC_TYPES.iter().any(|t| db_type.contains(t)) {
            FieldType::Number
        } else {
            FieldType::Text
        }
    }

    /// Icon glyph drawn next to the field name.
    pub fn icon(&self) -> &'static str {
        match self {
            FieldType::Text => "type",
            FieldType::Email => "mail",
            FieldType::Number => "hash",
            FieldType::Date => "calendar",
            FieldType::Boolean => "toggle-left",
            FieldType::Relation => "link",
        }
    }

    /// Accent color for the icon, as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            FieldType::Text => "#64748b",
            FieldType::Email => "#0ea5e9",
            FieldType::Number => "#10b981",
            FieldType::Date => "#f59e0b",
            FieldType::Boolean => "#8b5cf6",
            FieldType::Relation => "#ef4444",
        }
    }

    /// Lowercase type name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
            FieldType::Relation => "relation",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
