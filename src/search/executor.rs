//! Search execution and orchestration

use super::models::{DetailQuery, SearchQuery, SimilarQuery};
use crate::categories::{Category, CategoryProfile};
use crate::error::{DispatchError, Result};
use crate::provider::{ContentsOptions, FindSimilarRequest, SearchBackend, SearchRequest, SearchType};
use crate::results::{CategoryResultSet, SearchResult};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Results per category for a bulk search
pub const BULK_NUM_RESULTS: u32 = 6;
/// Text excerpt cap for a bulk search
pub const BULK_MAX_CHARACTERS: u32 = 300;
/// Results for a detail query
pub const DETAIL_NUM_RESULTS: u32 = 10;
/// Text excerpt cap for a detail query
pub const DETAIL_MAX_CHARACTERS: u32 = 1500;
/// Results for a similar-sources query
pub const SIMILAR_NUM_RESULTS: u32 = 8;
/// Text excerpt cap for a similar-sources query
pub const SIMILAR_MAX_CHARACTERS: u32 = 1200;

/// Search dispatcher that fans queries out to the provider
pub struct Search {
    /// Provider backend
    backend: Arc<dyn SearchBackend>,
    /// Provider API key
    api_key: Option<String>,
}

impl Search {
    /// Create a new dispatcher
    pub fn new(backend: Arc<dyn SearchBackend>, api_key: Option<String>) -> Self {
        Self {
            backend,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(DispatchError::MissingApiKey)
    }

    /// Search all four categories concurrently.
    ///
    /// A category whose provider call fails comes back empty; the others
    /// are unaffected. Fails only on blank query text or a missing API key,
    /// in both cases before any provider call.
    pub async fn execute(&self, query: &SearchQuery) -> Result<CategoryResultSet> {
        if query.text.trim().is_empty() {
            return Err(DispatchError::EmptyQuery);
        }
        let api_key = self.api_key()?.to_string();
        let start = Instant::now();

        info!(
            "Executing search '{}' on {} categories ({})",
            query.text,
            Category::ALL.len(),
            query.search_type()
        );

        let handles: Vec<_> = Category::ALL
            .into_iter()
            .map(|category| {
                let backend = self.backend.clone();
                let api_key = api_key.clone();
                let request = Self::bulk_request(category, query);
                (
                    category,
                    tokio::spawn(async move {
                        Self::search_category(backend, category, api_key, request).await
                    }),
                )
            })
            .collect();

        let (categories, handles): (Vec<_>, Vec<_>) = handles.into_iter().unzip();
        let outcomes = join_all(handles).await;

        let results = categories
            .into_iter()
            .zip(outcomes)
            .map(|(category, outcome)| {
                let results = outcome.unwrap_or_else(|e| {
                    error!("Search task for {} did not complete: {}", category, e);
                    Vec::new()
                });
                (category, results)
            })
            .collect::<CategoryResultSet>();

        debug!(
            "Search '{}' returned {} results in {:?}",
            query.text,
            results.len(),
            start.elapsed()
        );

        Ok(results)
    }

    /// Search a single category, degrading any failure to no results
    async fn search_category(
        backend: Arc<dyn SearchBackend>,
        category: Category,
        api_key: String,
        request: SearchRequest,
    ) -> Vec<SearchResult> {
        let start = Instant::now();
        match backend.search(&api_key, &request).await {
            Ok(results) => {
                debug!(
                    "Category {} returned {} results in {:?}",
                    category,
                    results.len(),
                    start.elapsed()
                );
                results
            }
            Err(e) => {
                warn!("{} search failed for {}: {}", backend.name(), category, e);
                Vec::new()
            }
        }
    }

    /// Re-query one category with longer excerpts and generated summaries
    pub async fn detail(&self, query: &DetailQuery) -> Result<Vec<SearchResult>> {
        if query.text.trim().is_empty() {
            return Err(DispatchError::EmptyQuery);
        }
        let api_key = self.api_key()?;
        let request = Self::detail_request(query);

        info!("Executing detail search '{}' for {}", query.text, query.category);

        self.backend
            .search(api_key, &request)
            .await
            .map_err(|e| {
                error!(
                    "{} detail search failed for {}: {}",
                    self.backend.name(),
                    query.category,
                    e
                );
                DispatchError::from(e)
            })
    }

    /// Find sources similar to a seed URL, never returning the seed itself
    pub async fn similar(&self, query: &SimilarQuery) -> Result<Vec<SearchResult>> {
        if query.url.trim().is_empty() {
            return Err(DispatchError::MissingSourceUrl);
        }
        let api_key = self.api_key()?;
        let request = Self::similar_request(query);

        info!("Finding sources similar to {}", query.url);

        let results = self
            .backend
            .find_similar(api_key, &request)
            .await
            .map_err(|e| {
                error!("{} find-similar failed: {}", self.backend.name(), e);
                DispatchError::from(e)
            })?;

        Ok(results.into_iter().filter(|r| r.url != query.url).collect())
    }

    /// Provider request for one category of a bulk search
    pub fn bulk_request(category: Category, query: &SearchQuery) -> SearchRequest {
        let profile = category.profile();
        SearchRequest {
            query: category.provider_query(&query.text),
            num_results: BULK_NUM_RESULTS,
            search_type: query.search_type(),
            contents: ContentsOptions::excerpt(BULK_MAX_CHARACTERS),
            category: profile.provider_category.map(str::to_string),
            include_domains: include_domains(profile),
        }
    }

    /// Provider request for a detail query
    pub fn detail_request(query: &DetailQuery) -> SearchRequest {
        let profile = query.category.profile();
        SearchRequest {
            query: query.category.provider_query(&query.text),
            num_results: DETAIL_NUM_RESULTS,
            search_type: SearchType::Auto,
            contents: ContentsOptions::excerpt(DETAIL_MAX_CHARACTERS).with_summary(format!(
                "Summarize this source in 2-3 sentences related to: {}. Include one key takeaway.",
                query.text
            )),
            category: profile.provider_category.map(str::to_string),
            include_domains: include_domains(profile),
        }
    }

    /// Provider request for a similar-sources query
    pub fn similar_request(query: &SimilarQuery) -> FindSimilarRequest {
        let summary = match query.context.as_deref() {
            Some(context) => format!(
                "Summarize this source in 2-3 sentences in context of: {}. Include one key takeaway.",
                context
            ),
            None => {
                "Summarize this source in 2-3 sentences and include one key takeaway.".to_string()
            }
        };

        FindSimilarRequest {
            url: query.url.clone(),
            num_results: SIMILAR_NUM_RESULTS,
            search_type: SearchType::from_deep(query.deep),
            contents: ContentsOptions::excerpt(SIMILAR_MAX_CHARACTERS).with_summary(summary),
            include_domains: query
                .category
                .and_then(|c| include_domains(c.profile())),
        }
    }
}

fn include_domains(profile: &CategoryProfile) -> Option<Vec<String>> {
    profile
        .include_domains
        .map(|domains| domains.iter().map(|d| d.to_string()).collect())
}
