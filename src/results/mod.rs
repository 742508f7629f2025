//! Result types and display helpers
//!
//! This module defines the provider result shape, the per-category result
//! set, and the fields derived from a result for display.

mod card;
mod owner;
mod types;

pub use card::{format_date, source_domain, ResultCard};
pub use owner::{looks_like_date, patent_owner};
pub use types::*;
