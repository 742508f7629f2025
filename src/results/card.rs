//! Display projection of a result within its category

use super::owner::patent_owner;
use super::types::SearchResult;
use crate::categories::Category;
use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use url::Url;

/// Characters of text used as a snippet when no highlight is present
const SNIPPET_CHARS: usize = 150;

/// Display fields derived from a [`SearchResult`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    pub title: String,
    pub url: String,
    /// Host name without a leading `www.`
    pub source: Option<String>,
    /// Published date formatted like `Apr 5, 2023`
    pub date: Option<String>,
    /// Patent assignee (patents only)
    pub owner: Option<String>,
    /// Author line (every other category)
    pub author: Option<String>,
    pub summary: Option<String>,
    pub snippet: Option<String>,
    pub takeaway: Option<String>,
    /// Plain-text block for copying: title, summary and takeaway
    pub clipboard: String,
}

impl ResultCard {
    /// Build the card for a result shown under `category`
    pub fn new(result: &SearchResult, category: Option<Category>) -> Self {
        let is_patent = category == Some(Category::Patents);
        let summary = non_empty(result.summary.as_deref())
            .or_else(|| non_empty(result.text.as_deref()))
            .map(str::to_string);
        let takeaway = result.first_highlight().map(str::to_string);
        let snippet = takeaway.clone().or_else(|| {
            non_empty(result.text.as_deref()).map(|t| t.chars().take(SNIPPET_CHARS).collect())
        });

        let clipboard = [Some(result.title.as_str()), summary.as_deref(), takeaway.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        Self {
            title: result.title.clone(),
            url: result.url.clone(),
            source: source_domain(&result.url),
            date: result.published_date.as_deref().and_then(format_date),
            owner: if is_patent {
                patent_owner(result.author.as_deref())
            } else {
                None
            },
            author: if is_patent {
                None
            } else {
                non_empty(result.author.as_deref()).map(str::to_string)
            },
            summary,
            snippet,
            takeaway,
            clipboard,
        }
    }

    /// Build cards for a list of results
    pub fn for_results(results: &[SearchResult], category: Option<Category>) -> Vec<Self> {
        results.iter().map(|r| Self::new(r, category)).collect()
    }
}

/// Host of a URL with any leading `www.` removed
pub fn source_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// Format a provider date (RFC 3339 or `YYYY-MM-DD`) like `Apr 5, 2023`
pub fn format_date(raw: &str) -> Option<String> {
    let date = match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.date_naive(),
        Err(_) => NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()?,
    };
    Some(date.format("%b %-d, %Y").to_string())
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
