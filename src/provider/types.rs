//! Request and response bodies of the provider API

use crate::results::SearchResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-side search depth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Auto,
    Deep,
}

impl SearchType {
    /// `Deep` when deep mode is requested, `Auto` otherwise
    pub fn from_deep(deep: bool) -> Self {
        if deep {
            Self::Deep
        } else {
            Self::Auto
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Deep => f.write_str("deep"),
        }
    }
}

/// Content extraction options attached to every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentsOptions {
    pub text: TextOptions,
    pub highlights: HighlightOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryOptions>,
}

impl ContentsOptions {
    /// Text excerpt capped at `max_characters` and a single highlight sentence
    pub fn excerpt(max_characters: u32) -> Self {
        Self {
            text: TextOptions { max_characters },
            highlights: HighlightOptions { num_sentences: 1 },
            summary: None,
        }
    }

    /// Also request a generated summary guided by `query`
    pub fn with_summary(mut self, query: impl Into<String>) -> Self {
        self.summary = Some(SummaryOptions {
            query: query.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    pub max_characters: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightOptions {
    pub num_sentences: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub query: String,
}

/// Body of a keyword/semantic search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub num_results: u32,
    #[serde(rename = "type")]
    pub search_type: SearchType,
    pub contents: ContentsOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,
}

/// Body of a find-similar-by-URL request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindSimilarRequest {
    pub url: String,
    pub num_results: u32,
    #[serde(rename = "type")]
    pub search_type: SearchType,
    pub contents: ContentsOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,
}

/// Response body shared by both endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_wire_shape() {
        let request = SearchRequest {
            query: "patent: mRNA".to_string(),
            num_results: 6,
            search_type: SearchType::Deep,
            contents: ContentsOptions::excerpt(300),
            category: None,
            include_domains: Some(vec!["patents.google.com".to_string()]),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "patent: mRNA",
                "numResults": 6,
                "type": "deep",
                "contents": {
                    "text": {"maxCharacters": 300},
                    "highlights": {"numSentences": 1}
                },
                "includeDomains": ["patents.google.com"]
            })
        );
    }

    #[test]
    fn test_summary_is_nested_under_contents() {
        let contents = ContentsOptions::excerpt(1500).with_summary("Summarize");
        let value = serde_json::to_value(&contents).unwrap();
        assert_eq!(value["summary"], json!({"query": "Summarize"}));
    }

    #[test]
    fn test_search_type_from_deep() {
        assert_eq!(SearchType::from_deep(true), SearchType::Deep);
        assert_eq!(SearchType::from_deep(false), SearchType::Auto);
        assert_eq!(SearchType::Auto.to_string(), "auto");
    }

    #[test]
    fn test_response_without_results() {
        let response: ProviderResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }
}
