//! Configuration module for erdq.
//!
//! Handles service endpoints, export targets, layout and logging settings.

mod settings;

pub use settings::{
    expand_env_vars, join_url, ExportSettings, LoggingSettings, ServiceSettings, Settings,
    SettingsError,
};
