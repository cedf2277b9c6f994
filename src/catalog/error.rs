//! Catalog-specific error types.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while fetching the schema catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request could not be sent or the connection failed.
    #[error("catalog request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("catalog service returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, or the status reason when the body is empty.
        message: String,
    },

    /// The response body was not a valid catalog document.
    #[error("failed to decode catalog response: {0}")]
    DecodeFailed(#[source] reqwest::Error),
}
