//! The four fixed result categories and their static request profiles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registries the patents category is restricted to
pub const PATENT_DOMAINS: &[&str] = &[
    "patents.google.com",
    "patentscope.wipo.int",
    "worldwide.espacenet.com",
    "ppubs.uspto.gov",
    "patents.justia.com",
    "freepatentsonline.com",
];

/// A result category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Research,
    News,
    Patents,
    Companies,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 4] = [
        Category::Research,
        Category::News,
        Category::Patents,
        Category::Companies,
    ];

    /// Key used in URLs and response bodies
    pub fn key(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::News => "news",
            Self::Patents => "patents",
            Self::Companies => "companies",
        }
    }

    /// Static request profile for this category
    pub fn profile(self) -> &'static CategoryProfile {
        match self {
            Self::Research => &RESEARCH,
            Self::News => &NEWS,
            Self::Patents => &PATENTS,
            Self::Companies => &COMPANIES,
        }
    }

    /// Provider query for a user's raw query text
    pub fn provider_query(self, text: &str) -> String {
        format!("{} {}", self.profile().query_prefix, text)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown category key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Read-only request profile of a category
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryProfile {
    /// Phrase placed before the user's query
    pub query_prefix: &'static str,
    /// Provider-side category filter
    pub provider_category: Option<&'static str>,
    /// Source domain allow-list
    pub include_domains: Option<&'static [&'static str]>,
}

static RESEARCH: CategoryProfile = CategoryProfile {
    query_prefix: "academic research papers about",
    provider_category: Some("research paper"),
    include_domains: None,
};

static NEWS: CategoryProfile = CategoryProfile {
    query_prefix: "biotech pharma news clinical trials funding",
    provider_category: Some("news"),
    include_domains: None,
};

static PATENTS: CategoryProfile = CategoryProfile {
    query_prefix: "patent:",
    provider_category: None,
    include_domains: Some(PATENT_DOMAINS),
};

static COMPANIES: CategoryProfile = CategoryProfile {
    query_prefix: "biotech pharmaceutical company working on",
    provider_category: Some("company"),
    include_domains: None,
};
