//! Create-query submission.
//!
//! A single `POST {api_service}/query/create-query` with no timeout, retry,
//! or cancellation. Whatever the outcome, local diagram state is untouched.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::error::SubmitError;
use crate::config::join_url;
use crate::query::QuerySpecification;

/// Notification text when the API gives no usable error body.
pub const GENERIC_FAILURE: &str = "Failed to create query";

/// Notification text on success.
pub const SUCCESS_MESSAGE: &str = "Query created successfully";

/// Request body of `query/create-query`.
///
/// ```json
/// { "data_source_id": "...", "queries": { "request": { ... }, "type": "..." }, "type": "..." }
/// ```
#[derive(Debug, Serialize)]
pub struct CreateQueryRequest<'a> {
    pub data_source_id: &'a str,
    pub queries: QueryPayload<'a>,
    #[serde(rename = "type")]
    pub query_type: &'a str,
}

#[derive(Debug, Serialize)]
pub struct QueryPayload<'a> {
    pub request: &'a QuerySpecification,
    #[serde(rename = "type")]
    pub query_type: &'a str,
}

impl<'a> CreateQueryRequest<'a> {
    pub fn new(
        data_source_id: &'a str,
        request: &'a QuerySpecification,
        query_type: &'a str,
    ) -> Self {
        Self {
            data_source_id,
            queries: QueryPayload {
                request,
                query_type,
            },
            query_type,
        }
    }
}

/// The external query-creation service.
#[async_trait]
pub trait QueryApi: Send + Sync {
    async fn create_query(
        &self,
        data_source_id: &str,
        specification: &QuerySpecification,
        query_type: &str,
    ) -> Result<(), SubmitError>;
}

#[derive(Debug, Clone)]
pub struct HttpQueryApi {
    client: Client,
    base_url: String,
}

impl HttpQueryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        join_url(&self.base_url, "query/create-query")
    }
}

#[async_trait]
impl QueryApi for HttpQueryApi {
    async fn create_query(
        &self,
        data_source_id: &str,
        specification: &QuerySpecification,
        query_type: &str,
    ) -> Result<(), SubmitError> {
        let body = CreateQueryRequest::new(data_source_id, specification, query_type);
        log::debug!("submitting {} query for data source {}", query_type, data_source_id);

        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(SubmitError::RequestFailed)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let message = if text.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            text
        };
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
