//! Search orchestration module
//!
//! Fans a query out to the provider across the four categories, and runs
//! the single-category detail and similar-sources queries.

mod executor;
mod models;

pub use executor::*;
pub use models::*;
