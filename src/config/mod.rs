//! Configuration module
//!
//! This module loads the crawl input record (keywords, search type, proxies and
//! optional session tuning) from JSON or TOML and validates it.
//!
//! # Example
//!
//! ```no_run
//! use gh_search_crawler::config::load_input;
//! use gh_search_crawler::SearchQuery;
//! use std::path::Path;
//!
//! let input = load_input(Path::new("input_data.json")).unwrap();
//! let query = SearchQuery::try_from(&input).unwrap();
//! println!("Query text: {}", query.query_text());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CrawlInput, CrawlerConfig, SearchKind, SearchQuery, DEFAULT_BASE_URL,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{compute_input_hash, load_input, load_input_with_hash, parse_input, InputFormat};

pub use validation::validate;
pub(crate) use validation::validate_proxy;
