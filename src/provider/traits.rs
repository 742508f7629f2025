//! Search backend trait and error type

use super::types::{FindSimilarRequest, SearchRequest};
use crate::results::SearchResult;
use async_trait::async_trait;

/// Failure talking to the search provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with a non-2xx status
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON
    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// A provider able to run text searches and find-similar lookups
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &str;

    /// Run a keyword/semantic search
    async fn search(
        &self,
        api_key: &str,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResult>, ProviderError>;

    /// Find documents similar to a URL
    async fn find_similar(
        &self,
        api_key: &str,
        request: &FindSimilarRequest,
    ) -> Result<Vec<SearchResult>, ProviderError>;
}
