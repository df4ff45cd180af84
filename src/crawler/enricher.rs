//! Repository enrichment
//!
//! Fetches a repository's detail page and extracts its owner and language
//! breakdown.

use crate::crawler::fetcher::HttpFetcher;
use crate::crawler::parser::parse_language_stats;
use crate::logging::CrawlLog;
use crate::output::RepositoryEnrichment;
use crate::CrawlerError;
use std::sync::Arc;
use url::Url;

/// Builds a [`RepositoryEnrichment`] for one search result
#[derive(Clone)]
pub struct RepositoryEnricher {
    fetcher: HttpFetcher,
    base_url: Url,
    log: Arc<dyn CrawlLog>,
}

impl RepositoryEnricher {
    pub fn new(fetcher: HttpFetcher, base_url: Url, log: Arc<dyn CrawlLog>) -> Self {
        Self {
            fetcher,
            base_url,
            log,
        }
    }

    /// Enriches one result URL (`/owner/repo` or an absolute URL on the site)
    ///
    /// Fetch failures propagate as `CrawlerError::Fetch`.
    pub async fn enrich(&self, result_url: &str) -> Result<RepositoryEnrichment, CrawlerError> {
        self.log
            .info(&format!("Fetching extra info for {}", result_url));

        let detail_url = self.base_url.join(result_url)?;
        let owner =
            extract_owner(&detail_url).ok_or_else(|| CrawlerError::InvalidResultUrl {
                url: result_url.to_string(),
            })?;

        let page = self.fetcher.fetch(detail_url.as_str(), &[]).await?;
        let language_stats = parse_language_stats(&page.body);

        self.log
            .info(&format!("Extra info fetched for {}", result_url));

        Ok(RepositoryEnrichment {
            owner,
            language_stats,
        })
    }
}

/// First non-empty path segment of a repository URL
fn extract_owner(url: &Url) -> Option<String> {
    url.path_segments()?
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}
