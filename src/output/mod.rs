//! Output module for crawl results
//!
//! This module handles:
//! - The result types handed back by a search
//! - Persisting a result collection as a JSON array

mod json;
mod types;

pub use json::{to_json_string, write_results};
pub use types::{CrawlEntry, CrawlResult, RepositoryEnrichment};

use thiserror::Error;

/// Errors that can occur while persisting results
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
