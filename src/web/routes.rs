//! Route definitions

use super::error::ApiError;
use super::handlers;
use super::state::AppState;
use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        // API routes
        .route("/api/search", post(handlers::search))
        .route("/api/search/detail", get(handlers::detail))
        .route("/api/search/similar", get(handlers::similar))
        .route("/health", get(handlers::health))
        // Add middleware
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CompressionLayer::new())
        .layer(cors)
        // Add state
        .with_state(state)
}

fn panic_response(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");
    ApiError::unexpected().into_response()
}
