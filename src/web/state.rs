//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::provider::{ExaBackend, SearchBackend};
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search dispatcher
    pub search: Arc<Search>,
}

impl AppState {
    /// Create new application state backed by the Exa API
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let backend = Arc::new(ExaBackend::new(client, settings.provider.base_url.clone()));
        Self::with_backend(settings, backend)
    }

    /// Create application state with an explicit search backend
    pub fn with_backend(settings: Settings, backend: Arc<dyn SearchBackend>) -> Self {
        let search = Arc::new(Search::new(
            backend,
            settings.api_key().map(str::to_string),
        ));

        Self {
            settings: Arc::new(settings),
            search,
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
