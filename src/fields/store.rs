use indexmap::IndexMap;

use super::panel::ConfigPanel;
use crate::model::{FieldConfig, FieldKey};

/// Ordered map of field configs, as handed to the compiler.
///
/// Order is the order in which keys were first saved.
pub type FieldConfigs = IndexMap<FieldKey, FieldConfig>;

/// Holds at most one [`FieldConfig`] per `table.field` key.
///
/// Entries can be replaced but never removed.
#[derive(Debug, Clone, Default)]
pub struct FieldConfigStore {
    configs: FieldConfigs,
}

impl FieldConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the panel for `key`, loading the stored config or a default
    /// draft when the field has never been saved.
    pub fn open(&self, key: FieldKey) -> ConfigPanel {
        let draft = self.configs.get(&key).cloned().unwrap_or_default();
        ConfigPanel::new(key, draft)
    }

    /// Store the panel's draft, replacing any existing entry wholesale.
    ///
    /// A key that was saved before keeps its original position.
    pub fn save(&mut self, panel: ConfigPanel) {
        let (key, draft) = panel.into_parts();
        log::debug!("saving field config for {}", key);
        self.configs.insert(key, draft);
    }

    pub fn get(&self, key: &FieldKey) -> Option<&FieldConfig> {
        self.configs.get(key)
    }

    pub fn contains(&self, key: &FieldKey) -> bool {
        self.configs.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &FieldConfig)> {
        self.configs.iter()
    }

    /// An immutable copy of the current configs.
    pub fn snapshot(&self) -> FieldConfigs {
        self.configs.clone()
    }

    /// Borrow the configs without copying.
    pub fn as_map(&self) -> &FieldConfigs {
        &self.configs
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
