//! Export and submission error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors from clipboard and file exports.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to serialize specification: {0}")]
    SerializeFailed(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("clipboard command failed: {0}")]
    ClipboardFailed(#[source] io::Error),
}

/// Errors from the create-query submission.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The request could not be sent or the connection failed.
    #[error("query submission failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// The API rejected the query.
    #[error("query API returned {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body text, or a generic message when the body is empty.
        message: String,
    },
}

impl SubmitError {
    /// Text shown in the failure notification.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected { message, .. } => message.clone(),
            SubmitError::RequestFailed(_) => super::submit::GENERIC_FAILURE.to_string(),
        }
    }
}
