//! Search query data models

use crate::categories::Category;
use crate::error::{DispatchError, Result};
use crate::provider::SearchType;
use serde::{Deserialize, Serialize};

/// A user's bulk search submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Raw query text, sent to the provider verbatim
    pub text: String,
    /// Use the provider's deep search mode
    pub deep_mode: bool,
}

impl SearchQuery {
    /// Create a query, rejecting blank text
    pub fn new(text: impl Into<String>, deep_mode: bool) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DispatchError::EmptyQuery);
        }
        Ok(Self { text, deep_mode })
    }

    /// Create a non-deep query
    pub fn simple(text: impl Into<String>) -> Result<Self> {
        Self::new(text, false)
    }

    /// Provider search depth for this query
    pub fn search_type(&self) -> SearchType {
        SearchType::from_deep(self.deep_mode)
    }
}

/// A single-category detail re-query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailQuery {
    pub text: String,
    pub category: Category,
}

impl DetailQuery {
    /// Validate raw query text and category key
    pub fn parse(text: Option<&str>, category: Option<&str>) -> Result<Self> {
        let text = text
            .filter(|t| !t.trim().is_empty())
            .ok_or(DispatchError::EmptyQuery)?;
        let key = category.unwrap_or_default();
        let category = key
            .parse::<Category>()
            .map_err(|_| DispatchError::UnknownCategory(key.to_string()))?;
        Ok(Self {
            text: text.to_string(),
            category,
        })
    }
}

/// A find-similar-sources request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarQuery {
    /// Seed document URL
    pub url: String,
    /// Category the seed came from; unknown keys attach no domain filter
    pub category: Option<Category>,
    /// Use the provider's deep search mode
    pub deep: bool,
    /// Free-text query the summaries should relate to
    pub context: Option<String>,
}

impl SimilarQuery {
    /// Create a query for a seed URL, rejecting a blank one
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(DispatchError::MissingSourceUrl);
        }
        Ok(Self {
            url,
            category: None,
            deep: false,
            context: None,
        })
    }

    /// Set the category from a raw key; unknown keys are ignored
    pub fn with_category_key(mut self, key: Option<&str>) -> Self {
        self.category = key.and_then(|k| k.parse::<Category>().ok());
        self
    }

    /// Set deep mode
    pub fn with_deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    /// Set the context query; blank text counts as absent
    pub fn with_context(mut self, context: Option<&str>) -> Self {
        self.context = context
            .filter(|c| !c.trim().is_empty())
            .map(str::to_string);
        self
    }
}
