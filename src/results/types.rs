//! Result type definitions

use crate::categories::Category;
use serde::{Deserialize, Deserializer, Serialize};

/// A single result as returned by the search provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// The title of the result
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// The URL of the result
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// Published date as reported by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    /// Free-text author field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Text excerpt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Highlighted sentences, most relevant first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    /// Generated summary (detail and similar queries only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl SearchResult {
    /// Create a result with just a title and URL
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Add a text excerpt
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add an author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Add a published date
    pub fn with_published_date(mut self, date: impl Into<String>) -> Self {
        self.published_date = Some(date.into());
        self
    }

    /// Add a highlight sentence
    pub fn with_highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlights
            .get_or_insert_with(Vec::new)
            .push(highlight.into());
        self
    }

    /// Add a generated summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// First non-empty highlight
    pub fn first_highlight(&self) -> Option<&str> {
        self.highlights
            .as_ref()
            .and_then(|h| h.first())
            .map(String::as_str)
            .filter(|h| !h.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Results for all four categories, each in provider relevance order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryResultSet {
    pub research: Vec<SearchResult>,
    pub news: Vec<SearchResult>,
    pub patents: Vec<SearchResult>,
    pub companies: Vec<SearchResult>,
}

impl CategoryResultSet {
    /// Results for one category
    pub fn get(&self, category: Category) -> &[SearchResult] {
        match category {
            Category::Research => &self.research,
            Category::News => &self.news,
            Category::Patents => &self.patents,
            Category::Companies => &self.companies,
        }
    }

    /// Replace the results for one category
    pub fn set(&mut self, category: Category, results: Vec<SearchResult>) {
        let slot = match category {
            Category::Research => &mut self.research,
            Category::News => &mut self.news,
            Category::Patents => &mut self.patents,
            Category::Companies => &mut self.companies,
        };
        *slot = results;
    }

    /// Total number of results across categories
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    /// Check if every category is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(Category, Vec<SearchResult>)> for CategoryResultSet {
    fn from_iter<I: IntoIterator<Item = (Category, Vec<SearchResult>)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (category, results) in iter {
            set.set(category, results);
        }
        set
    }
}
