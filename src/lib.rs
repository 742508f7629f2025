//! Research Radar: fan a research query out to the Exa search API across
//! research papers, news, patents and companies.
//!
//! The [`search::Search`] dispatcher issues one provider request per
//! category concurrently and isolates failures per category; the [`web`]
//! module exposes it as a small JSON API.

pub mod categories;
pub mod config;
pub mod error;
pub mod network;
pub mod provider;
pub mod results;
pub mod search;
pub mod web;

pub use categories::Category;
pub use config::Settings;
pub use error::DispatchError;
pub use results::{CategoryResultSet, ResultCard, SearchResult};
pub use search::{DetailQuery, Search, SearchQuery, SimilarQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
