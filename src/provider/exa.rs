//! Exa search provider
//!
//! Posts JSON to the `/search` and `/findSimilar` endpoints, authenticated
//! with the `x-api-key` header.

use super::traits::{ProviderError, SearchBackend};
use super::types::{FindSimilarRequest, ProviderResponse, SearchRequest};
use crate::network::HttpClient;
use crate::results::SearchResult;
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

/// HTTP backend for the Exa API
pub struct ExaBackend {
    client: HttpClient,
    base_url: String,
}

impl ExaBackend {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post<B: Serialize + Sync>(
        &self,
        endpoint: &str,
        api_key: &str,
        body: &B,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .client
            .post_json(&url, &[("x-api-key", api_key)], body)
            .await?;

        if !response.is_success() {
            return Err(ProviderError::Status {
                status: response.status,
                body: response.text,
            });
        }

        let parsed: ProviderResponse = response.json()?;
        debug!("{} returned {} results", endpoint, parsed.results.len());
        Ok(parsed.results)
    }
}

#[async_trait]
impl SearchBackend for ExaBackend {
    fn name(&self) -> &str {
        "exa"
    }

    async fn search(
        &self,
        api_key: &str,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        self.post("search", api_key, request).await
    }

    async fn find_similar(
        &self,
        api_key: &str,
        request: &FindSimilarRequest,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        self.post("findSimilar", api_key, request).await
    }
}
