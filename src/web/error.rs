//! Mapping of dispatcher errors onto HTTP responses

use crate::error::DispatchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Endpoint an error was raised on; selects the message shown to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Detail,
    Similar,
}

/// JSON error response: `{ "error": message }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    /// Map a dispatcher error raised on `endpoint`
    pub fn new(endpoint: Endpoint, err: &DispatchError) -> Self {
        let (status, message) = match (endpoint, err) {
            (Endpoint::Search, e) if e.is_validation() => {
                (StatusCode::BAD_REQUEST, "Query is required")
            }
            (Endpoint::Detail, e) if e.is_validation() => {
                (StatusCode::BAD_REQUEST, "Valid query and category are required")
            }
            (Endpoint::Similar, e) if e.is_validation() => {
                (StatusCode::BAD_REQUEST, "Source URL is required")
            }
            (Endpoint::Search, DispatchError::MissingApiKey) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Search failed. Check your EXA_API_KEY.",
            ),
            (_, DispatchError::MissingApiKey) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "EXA_API_KEY is not set")
            }
            (Endpoint::Similar, _) => (StatusCode::BAD_GATEWAY, "Similar source search failed"),
            (_, _) => (StatusCode::BAD_GATEWAY, "Search failed"),
        };
        Self { status, message }
    }

    /// Generic failure for anything not anticipated
    pub fn unexpected() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Search failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
