//! Web server module
//!
//! Exposes the search dispatcher as a JSON HTTP API.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::{ApiError, Endpoint};
pub use handlers::{ResultsResponse, SearchBody};
pub use routes::create_router;
pub use state::AppState;
