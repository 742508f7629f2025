//! Error types for dispatcher operations.
//!
//! Messages are stable and never contain the API key.

use crate::provider::ProviderError;

/// Errors surfaced by the dispatcher to its caller.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Query text missing or blank.
    #[error("query is required")]
    EmptyQuery,

    /// Category key is not one of the four known categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Similar-sources query without a seed URL.
    #[error("source URL is required")]
    MissingSourceUrl,

    /// The provider API key is not configured.
    #[error("EXA_API_KEY is not set")]
    MissingApiKey,

    /// The provider call failed.
    #[error("upstream search failed: {0}")]
    Upstream(#[from] ProviderError),
}

impl DispatchError {
    /// Whether the caller sent a request that can never succeed as-is
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyQuery | Self::UnknownCategory(_) | Self::MissingSourceUrl
        )
    }
}

/// Convenience type alias for dispatcher results.
pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_category() {
        let err = DispatchError::UnknownCategory("foo".into());
        assert_eq!(err.to_string(), "unknown category: foo");
    }

    #[test]
    fn display_missing_api_key() {
        assert_eq!(DispatchError::MissingApiKey.to_string(), "EXA_API_KEY is not set");
    }

    #[test]
    fn upstream_wraps_provider_error() {
        let err: DispatchError = ProviderError::Transport("connection refused".into()).into();
        assert_eq!(
            err.to_string(),
            "upstream search failed: transport error: connection refused"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_kinds() {
        assert!(DispatchError::EmptyQuery.is_validation());
        assert!(DispatchError::MissingSourceUrl.is_validation());
        assert!(!DispatchError::MissingApiKey.is_validation());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DispatchError>();
    }
}
