//! Schema catalog backed by the data service's `get-db-structure` endpoint.

use async_trait::async_trait;
use reqwest::Client;

use super::error::{CatalogError, CatalogResult};
use super::provider::SchemaCatalog;
use super::types::DbStructure;
use crate::config::join_url;
use crate::model::Table;

/// `GET {data_service}/get-db-structure?data_source_id={id}`
#[derive(Debug, Clone)]
pub struct HttpSchemaCatalog {
    client: Client,
    base_url: String,
}

impl HttpSchemaCatalog {
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
        join_url(&self.base_url, "get-db-structure")
    }
}

#[async_trait]
impl SchemaCatalog for HttpSchemaCatalog {
    async fn fetch_tables(&self, data_source_id: &str) -> CatalogResult<Vec<Table>> {
        log::debug!("fetching db structure for data source {}", data_source_id);

        let response = self
            .client
            .get(self.endpoint())
            .query(&[("data_source_id", data_source_id)])
            .send()
            .await
            .map_err(CatalogError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body
            };
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let structure: DbStructure = response.json().await.map_err(CatalogError::DecodeFailed)?;
        Ok(structure.into_tables())
    }
}
