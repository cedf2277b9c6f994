//! Draft editing of one field's directives.

use crate::model::{Aggregation, Calculation, FieldConfig, FieldKey, Filter, SortBy};

/// An open configuration panel holding a local draft.
///
/// The draft is independent of the store: nothing is written back until the
/// panel is handed to [`FieldConfigStore::save`](super::FieldConfigStore::save).
/// Dropping the panel (or calling [`discard`](Self::discard)) closes it
/// without saving.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigPanel {
    key: FieldKey,
    draft: FieldConfig,
}

impl ConfigPanel {
    pub(crate) fn new(key: FieldKey, draft: FieldConfig) -> Self {
        Self { key, draft }
    }

    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    pub fn draft(&self) -> &FieldConfig {
        &self.draft
    }

    /// Replace the whole draft.
    pub fn set_draft(&mut self, draft: FieldConfig) {
        self.draft = draft;
    }

    pub fn set_included(&mut self, included: bool) -> &mut Self {
        self.draft.is_included = included;
        self
    }

    pub fn set_alias(&mut self, alias: Option<String>) -> &mut Self {
        self.draft.alias = alias;
        self
    }

    pub fn set_aggregation(&mut self, aggregation: Option<Aggregation>) -> &mut Self {
        self.draft.aggregation = aggregation;
        self
    }

    pub fn set_calculation(&mut self, calculation: Option<Calculation>) -> &mut Self {
        self.draft.calculation = calculation;
        self
    }

    pub fn set_filter(&mut self, filter: Option<Filter>) -> &mut Self {
        self.draft.filter = filter;
        self
    }

    pub fn set_group_by(&mut self, group_by: bool) -> &mut Self {
        self.draft.group_by = group_by;
        self
    }

    pub fn set_sort(&mut self, sort_by: Option<SortBy>) -> &mut Self {
        self.draft.sort_by = sort_by;
        self
    }

    /// Close without saving.
    pub fn discard(self) {}

    pub(crate) fn into_parts(self) -> (FieldKey, FieldConfig) {
        (self.key, self.draft)
    }
}
