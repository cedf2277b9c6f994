//! The canonical query specification consumed by the execution service.
//!
//! Serialized shape (field order is significant for byte-identical output):
//!
//! ```json
//! {
//!   "request": {
//!     "includeFields": [],
//!     "referenceTables": [],
//!     "joins": [],
//!     "filters": [],
//!     "calculations": [],
//!     "aggregations": [],
//!     "groupBy": [],
//!     "sortBy": []
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::joins::ReferenceTableEntry;
use crate::model::{AggregationFunction, FilterOperator, SortDirection};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpecification {
    /// Projections, e.g. `"orders.id"`, `"SUM(orders.amount) AS total"`
    pub include_fields: Vec<String>,
    pub reference_tables: Vec<ReferenceTableEntry>,
    /// Reserved for downstream compatibility; always empty.
    pub joins: Vec<serde_json::Value>,
    pub filters: Vec<FilterEntry>,
    pub calculations: Vec<CalculationEntry>,
    pub aggregations: Vec<AggregationEntry>,
    pub group_by: Vec<String>,
    /// Ordered ascending by priority
    pub sort_by: Vec<SortEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterEntry {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationEntry {
    pub expression: String,
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationEntry {
    pub field: String,
    pub function: AggregationFunction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    pub field: String,
    pub direction: SortDirection,
    pub priority: i32,
}

/// `{ "request": ... }` wrapper used for export and submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEnvelope {
    pub request: QuerySpecification,
}

impl From<QuerySpecification> for QueryEnvelope {
    fn from(request: QuerySpecification) -> Self {
        Self { request }
    }
}

impl QuerySpecification {
    /// True when nothing is projected, filtered, grouped or sorted.
    pub fn is_empty(&self) -> bool {
        self.include_fields.is_empty()
            && self.filters.is_empty()
            && self.calculations.is_empty()
            && self.aggregations.is_empty()
            && self.group_by.is_empty()
            && self.sort_by.is_empty()
    }
}
