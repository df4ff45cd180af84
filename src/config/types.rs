use crate::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Default site every search and detail page is resolved against
pub const DEFAULT_BASE_URL: &str = "https://github.com";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Raw input record, as read from the input file
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlInput {
    /// Search keywords, joined with single spaces to form the query
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Search type wire value (case-insensitive)
    #[serde(rename = "type", default)]
    pub search_type: String,

    /// Candidate proxy endpoints
    #[serde(default)]
    pub proxies: Vec<String>,

    /// Optional session tuning
    #[serde(default)]
    pub crawler: CrawlerConfig,
}

/// Session tuning, all fields optional in the input file
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Site root that search and result URLs are resolved against
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// Size of the enrichment worker pool (defaults to available parallelism)
    #[serde(rename = "max-concurrent-requests", default)]
    pub max_concurrent_requests: Option<usize>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout(),
            max_concurrent_requests: None,
        }
    }
}

impl CrawlerConfig {
    /// Number of enrichment workers allowed to run at once
    pub fn concurrency_limit(&self) -> usize {
        self.max_concurrent_requests.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        })
    }
}

/// Which category of content a search targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Repositories,
    Issues,
    Wikis,
}

impl SearchKind {
    /// The value sent as the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Repositories => "repositories",
            SearchKind::Issues => "issues",
            SearchKind::Wikis => "wikis",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "repositories" => Ok(SearchKind::Repositories),
            "issues" => Ok(SearchKind::Issues),
            "wikis" => Ok(SearchKind::Wikis),
            _ => Err(ConfigError::UnknownSearchKind(s.to_string())),
        }
    }
}

/// A validated search: keywords, kind and a non-empty proxy candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keywords: Vec<String>,
    kind: SearchKind,
    proxies: Vec<String>,
}

impl SearchQuery {
    /// Builds a query, rejecting unknown search kinds and empty proxy sets
    pub fn new(
        keywords: Vec<String>,
        kind: &str,
        proxies: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let kind: SearchKind = kind.parse()?;
        Self::with_kind(keywords, kind, proxies)
    }

    /// Builds a query from an already parsed kind
    pub fn with_kind(
        keywords: Vec<String>,
        kind: SearchKind,
        proxies: Vec<String>,
    ) -> Result<Self, ConfigError> {
        if proxies.is_empty() {
            return Err(ConfigError::NoProxies);
        }

        Ok(Self {
            keywords,
            kind,
            proxies,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    pub fn proxies(&self) -> &[String] {
        &self.proxies
    }

    /// The `q` parameter: keywords joined with single spaces
    pub fn query_text(&self) -> String {
        self.keywords.join(" ")
    }
}

impl TryFrom<&CrawlInput> for SearchQuery {
    type Error = ConfigError;

    fn try_from(input: &CrawlInput) -> Result<Self, Self::Error> {
        SearchQuery::new(
            input.keywords.clone(),
            &input.search_type,
            input.proxies.clone(),
        )
    }
}
