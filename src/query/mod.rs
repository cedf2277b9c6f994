//! Output contract of the compiler.

mod fingerprint;
mod spec;

pub use crate::joins::{JoinDescriptor, JoinType, ReferenceTableEntry};
pub use spec::{
    AggregationEntry, CalculationEntry, FilterEntry, QueryEnvelope, QuerySpecification, SortEntry,
};
