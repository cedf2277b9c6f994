//! Tables, fields and the per-field directives attached to them.

pub mod field_config;
pub mod field_type;
pub mod table;

pub use field_config::{
    Aggregation, AggregationFunction, Calculation, FieldConfig, FieldKey, FieldKeyError, Filter,
    FilterOperator, SortBy, SortDirection,
};
pub use field_type::FieldType;
pub use table::{Field, Table};
