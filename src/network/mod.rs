//! HTTP networking module
//!
//! Provides the outgoing HTTP client used to reach the search provider.

mod client;

pub use client::{HttpClient, HttpResponse, USER_AGENT};
