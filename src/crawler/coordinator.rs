//! Crawler coordinator - search orchestration logic
//!
//! This module ties the crawl together:
//! - Selecting the session proxy and building the shared HTTP client
//! - Fetching and parsing the search results page
//! - Fanning out repository enrichment over a bounded set of workers
//! - Reassembling results in search-page order and persisting them

use crate::config::{validate, CrawlInput, CrawlerConfig, SearchKind, SearchQuery};
use crate::crawler::enricher::RepositoryEnricher;
use crate::crawler::fetcher::HttpFetcher;
use crate::crawler::parser::parse_search_results;
use crate::crawler::proxy::{ProxySelector, RandomProxySelector};
use crate::logging::CrawlLog;
use crate::output::{write_results, CrawlEntry, CrawlResult, RepositoryEnrichment};
use crate::CrawlerError;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Path of the search page, relative to the base URL
const SEARCH_PATH: &str = "search";

/// A crawl session: one query, one proxy, one shared HTTP client
pub struct Coordinator {
    query: SearchQuery,
    proxy: String,
    search_url: Url,
    fetcher: HttpFetcher,
    enricher: RepositoryEnricher,
    max_workers: usize,
    log: Arc<dyn CrawlLog>,
}

impl Coordinator {
    /// Creates a new crawl session
    ///
    /// The proxy is chosen here, once, and used for every request the session makes.
    ///
    /// # Arguments
    ///
    /// * `query` - The validated search
    /// * `config` - Session tuning (base URL, timeout, worker count)
    /// * `selector` - Picks the proxy from the query's candidates
    /// * `log` - Receives lifecycle messages
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to search
    /// * `Err(CrawlerError)` - No usable proxy, bad base URL or client failure
    pub fn new(
        query: SearchQuery,
        config: &CrawlerConfig,
        selector: &dyn ProxySelector,
        log: Arc<dyn CrawlLog>,
    ) -> Result<Self, CrawlerError> {
        let proxy = selector.select(query.proxies())?;
        log.info(&format!("Selected proxy: {}", proxy));

        let base_url = Url::parse(&config.base_url)?;
        let search_url = base_url.join(SEARCH_PATH)?;

        let fetcher = HttpFetcher::new(
            &proxy,
            Duration::from_secs(config.request_timeout_secs),
            log.clone(),
        )?;
        let enricher = RepositoryEnricher::new(fetcher.clone(), base_url, log.clone());

        log.info(&format!(
            "Crawler initialized with keywords: {:?}, search type: {}",
            query.keywords(),
            query.kind()
        ));

        Ok(Self {
            query,
            proxy,
            search_url,
            fetcher,
            enricher,
            max_workers: config.concurrency_limit().max(1),
            log,
        })
    }

    /// Creates a session from a raw input record with a random proxy
    ///
    /// The record is validated first, the same way `load_input` validates it.
    pub fn from_input(input: &CrawlInput, log: Arc<dyn CrawlLog>) -> Result<Self, CrawlerError> {
        validate(input)?;
        let query = SearchQuery::try_from(input)?;
        Self::new(query, &input.crawler, &RandomProxySelector, log)
    }

    /// The proxy every request of this session goes through
    pub fn proxy(&self) -> &str {
        &self.proxy
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Runs the search and returns results in search-page order
    ///
    /// For repository searches every result is enriched; if any enrichment
    /// fails the whole search fails and no partial result is returned.
    pub async fn search(&self) -> Result<CrawlResult, CrawlerError> {
        let query_text = self.query.query_text();
        let params = [
            ("q", query_text.as_str()),
            ("type", self.query.kind().as_str()),
        ];
        self.log
            .info(&format!("Performing search with params: {:?}", params));

        let page = self.fetcher.fetch(self.search_url.as_str(), &params).await?;

        self.log.info("Parsing search results");
        let urls = parse_search_results(&page.body);
        self.log.info(&format!("Found {} results", urls.len()));

        let results = match self.query.kind() {
            SearchKind::Repositories => {
                self.log.info("Fetching extra info for repositories");
                let extras = self.enrich_all(&urls).await?;
                urls.into_iter()
                    .zip(extras)
                    .map(|(url, extra)| CrawlEntry::enriched(url, extra))
                    .collect()
            }
            SearchKind::Issues | SearchKind::Wikis => {
                urls.into_iter().map(CrawlEntry::plain).collect()
            }
        };

        self.log.info("Parsing completed");
        Ok(results)
    }

    /// Runs the search and writes the results to `destination` as JSON
    ///
    /// Returns the number of entries written.
    pub async fn run(&self, destination: &Path) -> Result<usize, CrawlerError> {
        self.log.info("Starting crawler run");

        let results = self.search().await?;
        write_results(&results, destination)?;

        self.log.info(&format!(
            "Crawler run completed. {} results saved to {}",
            results.len(),
            destination.display()
        ));

        Ok(results.len())
    }

    /// Enriches every URL with at most `max_workers` requests in flight
    ///
    /// Outcome `i` always belongs to `urls[i]`, whatever order the workers finish in.
    async fn enrich_all(
        &self,
        urls: &[String],
    ) -> Result<Vec<RepositoryEnrichment>, CrawlerError> {
        let semaphore = Arc::new(Semaphore::new(self.max_workers));
        let mut workers = JoinSet::new();

        for (index, url) in urls.iter().cloned().enumerate() {
            let enricher = self.enricher.clone();
            let semaphore = semaphore.clone();
            workers.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                (index, enricher.enrich(&url).await)
            });
        }

        let mut slots: Vec<Option<RepositoryEnrichment>> = vec![None; urls.len()];

        while let Some(joined) = workers.join_next().await {
            let (index, outcome) = joined?;
            match outcome {
                Ok(extra) => slots[index] = Some(extra),
                Err(e) => {
                    self.log.error(&format!(
                        "Failed to fetch extra info for {}: {}",
                        urls[index], e
                    ));
                    workers.abort_all();
                    return Err(e);
                }
            }
        }

        Ok(slots.into_iter().flatten().collect())
    }
}
