//! Compilation from diagram state to the canonical query specification.
//!
//! ```text
//! DiagramStore ──▶ join inference ──▶ reference tables ─┐
//!                                                       ├──▶ compile ──▶ QuerySpecification
//! FieldConfigStore ──▶ snapshot ────────────────────────┘
//! ```
//!
//! [`compile`] is pure: it reads an immutable snapshot of the field configs
//! and the inferred reference tables and builds a fresh specification on
//! every call.
//!
//! # Example
//!
//! ```ignore
//! use erdq::compile::compile_diagram;
//!
//! let output = compile_diagram(&diagram, &configs);
//! println!("{}", serde_json::to_string_pretty(&output.specification)?);
//! ```

use crate::diagram::DiagramStore;
use crate::fields::{FieldConfigStore, FieldConfigs};
use crate::joins::{infer_joins, DroppedConnection, ReferenceTableEntry};
use crate::model::field_config::non_empty;
use crate::model::{FieldConfig, FieldKey};
use crate::query::{
    AggregationEntry, CalculationEntry, FilterEntry, QuerySpecification, SortEntry,
};

// ============================================================================
// Result Types
// ============================================================================

/// Result of compiling the current diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOutput {
    /// The compiled specification.
    pub specification: QuerySpecification,

    /// Connections join inference could not use.
    pub dropped: Vec<DroppedConnection>,
}

// ============================================================================
// Compilation Functions
// ============================================================================

/// Compile field configs and reference tables into a specification.
///
/// # Arguments
///
/// * `field_configs` - Snapshot of the field configuration store
/// * `reference_tables` - Join inference output; when `None`, one bare
///   entry is emitted per name in `table_names`
/// * `table_names` - Tables on the canvas, in insertion order
///
/// Filters, group-bys and sorts are collected whether or not the field is
/// included. `sortBy` is ordered ascending by priority; ties keep config
/// order.
pub fn compile(
    field_configs: &FieldConfigs,
    reference_tables: Option<&[ReferenceTableEntry]>,
    table_names: &[String],
) -> QuerySpecification {
    let mut spec = QuerySpecification {
        reference_tables: match reference_tables {
            Some(entries) => entries.to_vec(),
            None => table_names
                .iter()
                .map(ReferenceTableEntry::bare)
                .collect(),
        },
        ..Default::default()
    };

    for (key, config) in field_configs {
        if config.is_included {
            spec.include_fields.push(projection(key, config));
            if let Some(aggregation) = &config.aggregation {
                spec.aggregations.push(AggregationEntry {
                    field: key.to_string(),
                    function: aggregation.function,
                    alias: non_empty(&aggregation.alias).map(str::to_string),
                });
            }
        }

        if let Some(calculation) = config.calculation.as_ref().filter(|c| c.is_complete()) {
            spec.calculations.push(CalculationEntry {
                expression: calculation.expression.clone(),
                alias: calculation.alias.clone(),
            });
            if config.is_included {
                spec.include_fields.push(format!(
                    "{} AS {}",
                    calculation.expression, calculation.alias
                ));
            }
        }

        if let Some(filter) = config.filter.as_ref().filter(|f| !f.value.is_empty()) {
            spec.filters.push(FilterEntry {
                field: key.to_string(),
                operator: filter.operator,
                value: filter.value.clone(),
            });
        }

        if config.group_by {
            spec.group_by.push(key.to_string());
        }

        if let Some(sort) = &config.sort_by {
            spec.sort_by.push(SortEntry {
                field: key.to_string(),
                direction: sort.direction,
                priority: sort.priority,
            });
        }
    }

    spec.sort_by.sort_by_key(|s| s.priority);
    spec
}

/// Run join inference over the diagram and compile the stored configs.
pub fn compile_diagram(diagram: &DiagramStore, configs: &FieldConfigStore) -> CompileOutput {
    let inference = infer_joins(diagram.nodes(), diagram.connections());
    let specification = compile(
        configs.as_map(),
        Some(inference.entries.as_slice()),
        &diagram.table_names(),
    );

    CompileOutput {
        specification,
        dropped: inference.dropped,
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// The `includeFields` entry for an included field, before any
/// calculation projection.
fn projection(key: &FieldKey, config: &FieldConfig) -> String {
    if let Some(aggregation) = &config.aggregation {
        format!(
            "{}({}) AS {}",
            aggregation.function,
            key,
            aggregation.resolved_alias(&key.field)
        )
    } else if let Some(alias) = config.alias() {
        format!("{} AS {}", key, alias)
    } else {
        key.to_string()
    }
}
