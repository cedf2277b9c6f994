//! Per-field query directives.
//!
//! A [`FieldConfig`] is the bundle of directives a user attaches to one
//! field of one table on the canvas. Configs are keyed by [`FieldKey`],
//! which renders as `"table.field"`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error parsing a `"table.field"` key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid field key '{0}': expected 'table.field'")]
pub struct FieldKeyError(pub String);

/// Identifies a field of a table, rendered as `"table.field"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldKey {
    pub table: String,
    pub field: String,
}

impl FieldKey {
    pub fn new(table: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.field)
    }
}

impl FromStr for FieldKey {
    type Err = FieldKeyError;

    /// Splits at the first `.`; the field part may itself contain dots.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((table, field)) if !table.is_empty() && !field.is_empty() => {
                Ok(FieldKey::new(table, field))
            }
            _ => Err(FieldKeyError(s.to_string())),
        }
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Aggregate function applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AggregationFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    Distinct,
}

impl AggregationFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationFunction::Count => "COUNT",
            AggregationFunction::Sum => "SUM",
            AggregationFunction::Avg => "AVG",
            AggregationFunction::Min => "MIN",
            AggregationFunction::Max => "MAX",
            AggregationFunction::Distinct => "DISTINCT",
        }
    }

    /// Alias used when the user leaves the aggregation alias blank:
    /// `"{func_lowercase}_{field}"`.
    pub fn default_alias(&self, field: &str) -> String {
        format!("{}_{}", self.as_str().to_lowercase(), field)
    }
}

impl fmt::Display for AggregationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregation {
    #[serde(rename = "type")]
    pub function: AggregationFunction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Aggregation {
    pub fn new(function: AggregationFunction) -> Self {
        Self {
            function,
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The alias the projection is emitted under.
    pub fn resolved_alias(&self, field: &str) -> String {
        match non_empty(&self.alias) {
            Some(alias) => alias.to_string(),
            None => self.function.default_alias(field),
        }
    }
}

/// A computed column: `{expression} AS {alias}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    #[serde(default)]
    pub expression: String,
    #[serde(default)]
    pub alias: String,
}

impl Calculation {
    pub fn new(expression: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            alias: alias.into(),
        }
    }

    /// Both the expression and the alias are filled in.
    pub fn is_complete(&self) -> bool {
        !self.expression.is_empty() && !self.alias.is_empty()
    }
}

/// Comparison operator of a filter directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    GtEq,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "NOT IN")]
    NotIn,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::NotEq => "!=",
            FilterOperator::Gt => ">",
            FilterOperator::Lt => "<",
            FilterOperator::GtEq => ">=",
            FilterOperator::LtEq => "<=",
            FilterOperator::Like => "LIKE",
            FilterOperator::In => "IN",
            FilterOperator::NotIn => "NOT IN",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub operator: FilterOperator,
    #[serde(default)]
    pub value: String,
}

impl Filter {
    pub fn new(operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            operator,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortBy {
    pub direction: SortDirection,
    #[serde(default)]
    pub priority: i32,
}

impl SortBy {
    pub fn new(direction: SortDirection, priority: i32) -> Self {
        Self {
            direction,
            priority,
        }
    }
}

/// Directive bundle for a single field.
///
/// A freshly opened field is included and ungrouped with every optional
/// directive unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    pub is_included: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<Aggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation: Option<Calculation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    pub group_by: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            is_included: true,
            alias: None,
            aggregation: None,
            calculation: None,
            filter: None,
            group_by: false,
            sort_by: None,
        }
    }
}

impl FieldConfig {
    /// A config that only filters; the field is not projected.
    pub fn filter_only(filter: Filter) -> Self {
        Self {
            is_included: false,
            filter: Some(filter),
            ..Default::default()
        }
    }

    pub fn with_included(mut self, included: bool) -> Self {
        self.is_included = included;
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = Some(aggregation);
        self
    }

    pub fn with_calculation(mut self, calculation: Calculation) -> Self {
        self.calculation = Some(calculation);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_group_by(mut self, group_by: bool) -> Self {
        self.group_by = group_by;
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// The projection alias, ignoring a blank entry.
    pub fn alias(&self) -> Option<&str> {
        non_empty(&self.alias)
    }
}

/// Treat `Some("")` the same as `None`; the panel clears text inputs to "".
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
