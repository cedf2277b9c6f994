//! TOML-based configuration for erdq.
//!
//! Supports a config file (erdq.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [services]
//! data_service = "${ERDQ_DATA_SERVICE}"
//! api_service = "https://api.example.com/v1"
//!
//! [export]
//! directory = "./exports"
//! clipboard_command = ["xclip", "-selection", "clipboard"]
//!
//! [layout]
//! column_spacing = 320
//!
//! [logging]
//! level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::diagram::GridLayout;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Service URL not configured: {0}")]
    MissingService(&'static str),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// External service endpoints.
    pub services: ServiceSettings,

    /// Export targets.
    pub export: ExportSettings,

    /// Node placement on the canvas grid.
    pub layout: GridLayout,

    /// Log filter for the binary.
    pub logging: LoggingSettings,
}

/// Base URLs of the schema catalog and query API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Data service hosting `get-db-structure` (supports ${ENV_VAR} expansion).
    pub data_service: Option<String>,

    /// API service hosting `query/create-query` (supports ${ENV_VAR} expansion).
    pub api_service: Option<String>,
}

impl ServiceSettings {
    pub fn resolved_data_service(&self) -> Result<String, SettingsError> {
        let url = self
            .data_service
            .as_deref()
            .ok_or(SettingsError::MissingService("data_service"))?;
        expand_env_vars(url)
    }

    pub fn resolved_api_service(&self) -> Result<String, SettingsError> {
        let url = self
            .api_service
            .as_deref()
            .ok_or(SettingsError::MissingService("api_service"))?;
        expand_env_vars(url)
    }
}

/// Export configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory downloads are written to.
    pub directory: PathBuf,

    /// Download file name; derived from the specification fingerprint when unset.
    pub file_name: Option<String>,

    /// Program (and arguments) that receives clipboard text on stdin.
    pub clipboard_command: Option<Vec<String>>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_name: None,
            clipboard_command: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter, overridden by `RUST_LOG`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `ERDQ_CONFIG`
    /// 2. `./erdq.toml`
    /// 3. `~/.config/erdq/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("ERDQ_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("erdq.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("erdq").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax. A `$` not followed by a name is
/// kept as is.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.peek() == Some(&'{') {
            chars.next();
            chars.by_ref().take_while(|&ch| ch != '}').collect()
        } else {
            let mut name = String::new();
            while let Some(&ch) = chars.peek() {
                if !(ch.is_alphanumeric() || ch == '_') {
                    break;
                }
                name.push(ch);
                chars.next();
            }
            if name.is_empty() {
                result.push('$');
                continue;
            }
            name
        };

        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}

/// Join a service base URL and an endpoint path with exactly one `/`.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
