//! HTTP request handlers

use super::error::{ApiError, Endpoint};
use super::state::AppState;
use crate::categories::Category;
use crate::error::DispatchError;
use crate::results::{ResultCard, SearchResult};
use crate::search::{DetailQuery, SearchQuery, SimilarQuery};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

/// Body of a bulk search request
#[derive(Debug, Deserialize)]
pub struct SearchBody {
    /// Search query
    pub query: Option<String>,
    /// Use deep search
    #[serde(default)]
    pub deep: bool,
}

/// Query parameters for a detail search
#[derive(Debug, Deserialize)]
pub struct DetailParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// Query parameters for a similar-sources search
#[derive(Debug, Deserialize)]
pub struct SimilarParams {
    /// Seed URL
    pub url: Option<String>,
    pub category: Option<String>,
    /// `1` enables deep search
    pub deep: Option<String>,
    /// Context query for the summaries
    pub q: Option<String>,
}

/// Results of a detail or similar-sources search
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: Vec<SearchResult>,
    pub cards: Vec<ResultCard>,
}

impl ResultsResponse {
    fn new(results: Vec<SearchResult>, category: Option<Category>) -> Self {
        let cards = ResultCard::for_results(&results, category);
        Self { results, cards }
    }
}

/// Bulk search handler
pub async fn search(
    State(state): State<AppState>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let fail = |e: DispatchError| ApiError::new(Endpoint::Search, &e);

    let Json(body) = body.map_err(|e| {
        tracing::debug!("Rejected search body: {}", e);
        fail(DispatchError::EmptyQuery)
    })?;

    let query = SearchQuery::new(body.query.unwrap_or_default(), body.deep).map_err(fail)?;
    let results = state.search.execute(&query).await.map_err(|e| {
        tracing::error!("Search error: {}", e);
        fail(e)
    })?;

    Ok(Json(results))
}

/// Single-category detail handler
pub async fn detail(
    State(state): State<AppState>,
    Query(params): Query<DetailParams>,
) -> Result<impl IntoResponse, ApiError> {
    let fail = |e: DispatchError| ApiError::new(Endpoint::Detail, &e);

    let query = DetailQuery::parse(params.q.as_deref(), params.category.as_deref()).map_err(fail)?;
    let results = state.search.detail(&query).await.map_err(fail)?;

    Ok(Json(ResultsResponse::new(results, Some(query.category))))
}

/// Similar-sources handler
pub async fn similar(
    State(state): State<AppState>,
    Query(params): Query<SimilarParams>,
) -> Result<impl IntoResponse, ApiError> {
    let fail = |e: DispatchError| ApiError::new(Endpoint::Similar, &e);

    let query = SimilarQuery::new(params.url.unwrap_or_default())
        .map_err(fail)?
        .with_category_key(params.category.as_deref())
        .with_deep(params.deep.as_deref() == Some("1"))
        .with_context(params.q.as_deref());
    let results = state.search.similar(&query).await.map_err(fail)?;

    Ok(Json(ResultsResponse::new(results, query.category)))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "instance": state.instance_name(),
        "version": crate::VERSION
    }))
}
