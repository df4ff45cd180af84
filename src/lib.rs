//! gh-search-crawler: a proxied search-page crawler
//!
//! This crate runs a single search against a code-hosting site's HTML search page,
//! extracts the result links and, for repository searches, enriches every result
//! with its owner and language breakdown fetched concurrently.

pub mod config;
pub mod crawler;
pub mod logging;
pub mod output;

use thiserror::Error;

/// Main error type for crawler operations
#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Result URL {url} has no owner segment")]
    InvalidResultUrl { url: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Enrichment worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("Unknown search type '{0}' (expected repositories, issues or wikis)")]
    UnknownSearchKind(String),

    #[error("No proxies configured")]
    NoProxies,

    #[error("Invalid proxy '{proxy}': {reason}")]
    InvalidProxy { proxy: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Transport-level failures of a single request
///
/// Every variant carries the requested URL and the underlying cause.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}: {source}")]
    Timeout { url: String, source: reqwest::Error },

    #[error("Connection failed for {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("Request failed for {url}: {source}")]
    Request { url: String, source: reqwest::Error },
}

impl FetchError {
    /// The URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            FetchError::Timeout { url, .. }
            | FetchError::Connect { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. }
            | FetchError::Request { url, .. } => url,
        }
    }
}

/// Result type alias for crawler operations
pub type Result<T> = std::result::Result<T, CrawlerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{CrawlInput, CrawlerConfig, SearchKind, SearchQuery};
pub use crawler::Coordinator;
pub use logging::{CrawlLog, NoopLog, TracingLog};
pub use output::{CrawlEntry, CrawlResult, RepositoryEnrichment};
