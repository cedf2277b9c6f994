use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::clipboard::{Clipboard, CommandClipboard};
use super::error::{ExportError, ExportResult};
use crate::config::ExportSettings;
use crate::query::{QueryEnvelope, QuerySpecification};

/// Pretty-printed `{ "request": ... }` document.
pub fn canonical_json(specification: &QuerySpecification) -> ExportResult<String> {
    let envelope = QueryEnvelope::from(specification.clone());
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Copies and downloads compiled specifications.
pub struct ExportGateway {
    directory: PathBuf,
    file_name: Option<String>,
    clipboard: Option<Arc<dyn Clipboard>>,
}

impl ExportGateway {
    /// A gateway that downloads into `directory` and has no clipboard.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            file_name: None,
            clipboard: None,
        }
    }

    /// Build from settings; the clipboard is the configured command or the
    /// first one found on `PATH`.
    pub fn from_settings(settings: &ExportSettings) -> ExportResult<Self> {
        let clipboard = match &settings.clipboard_command {
            Some(command) => Some(CommandClipboard::from_command(command)?),
            None => CommandClipboard::detect().ok(),
        };
        let gateway = Self::new(settings.directory.clone()).with_file_name(settings.file_name.clone());
        Ok(match clipboard {
            Some(clipboard) => gateway.with_clipboard(Arc::new(clipboard)),
            None => gateway,
        })
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn with_file_name(mut self, file_name: Option<String>) -> Self {
        self.file_name = file_name;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub async fn copy_to_clipboard(&self, specification: &QuerySpecification) -> ExportResult<()> {
        let clipboard = self.clipboard.as_ref().ok_or_else(|| {
            ExportError::ClipboardUnavailable("no clipboard configured".to_string())
        })?;
        let json = canonical_json(specification)?;
        clipboard.set_text(&json).await
    }

    /// Write the canonical JSON into the export directory and return the
    /// file's path.
    pub fn download(&self, specification: &QuerySpecification) -> ExportResult<PathBuf> {
        let json = canonical_json(specification)?;
        let name = match &self.file_name {
            Some(name) => name.clone(),
            None => default_file_name(specification)?,
        };
        let path = self.directory.join(name);

        fs::create_dir_all(&self.directory).map_err(|source| ExportError::WriteFailed {
            path: self.directory.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| ExportError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        log::info!("wrote query specification to {}", path.display());
        Ok(path)
    }
}

/// `query-spec-<first 8 fingerprint chars>.json`
pub fn default_file_name(specification: &QuerySpecification) -> ExportResult<String> {
    let fingerprint = specification.fingerprint()?;
    Ok(format!("query-spec-{}.json", &fingerprint[..8]))
}
