//! Field configuration store and the config panel used to edit it.

mod panel;
mod store;

pub use panel::ConfigPanel;
pub use store::{FieldConfigStore, FieldConfigs};
