use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-repository metadata attached to repository search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryEnrichment {
    /// First path segment of the repository URL
    pub owner: String,

    /// Language name to percentage (0-100); empty when the page reports none
    pub language_stats: BTreeMap<String, f64>,
}

/// One search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlEntry {
    /// Result URL exactly as it appeared on the search page
    pub url: String,

    /// Present only for repository searches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<RepositoryEnrichment>,
}

impl CrawlEntry {
    pub fn plain(url: String) -> Self {
        Self { url, extra: None }
    }

    pub fn enriched(url: String, extra: RepositoryEnrichment) -> Self {
        Self {
            url,
            extra: Some(extra),
        }
    }
}

/// Search results in the order they appeared on the search page
pub type CrawlResult = Vec<CrawlEntry>;
