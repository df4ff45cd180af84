//! Crawler module for search fetching and result enrichment
//!
//! This module contains the core crawling logic, including:
//! - Proxy selection for the session
//! - HTTP fetching through the selected proxy
//! - Search result and language breakdown extraction
//! - Concurrent repository enrichment and overall coordination

mod coordinator;
mod enricher;
mod fetcher;
mod parser;
mod proxy;

pub use coordinator::Coordinator;
pub use enricher::RepositoryEnricher;
pub use fetcher::{
    build_http_client, FetchedPage, HttpFetcher, BROWSER_ACCEPT, BROWSER_USER_AGENT,
};
pub use parser::{parse_language_stats, parse_search_results};
pub use proxy::{FirstProxySelector, ProxySelector, RandomProxySelector};

use crate::config::CrawlInput;
use crate::logging::CrawlLog;
use crate::CrawlerError;
use std::path::Path;
use std::sync::Arc;

/// Runs a complete crawl operation
///
/// This is the main entry point for a crawl. It will:
/// 1. Validate the search kind and proxy candidates
/// 2. Pick a random proxy and build the HTTP client
/// 3. Fetch and parse the search page
/// 4. Enrich repository results concurrently
/// 5. Write the results to `destination`
///
/// # Returns
///
/// * `Ok(usize)` - Number of results written
/// * `Err(CrawlerError)` - Crawl failed
pub async fn crawl(
    input: &CrawlInput,
    destination: &Path,
    log: Arc<dyn CrawlLog>,
) -> Result<usize, CrawlerError> {
    let coordinator = Coordinator::from_input(input, log)?;
    coordinator.run(destination).await
}
