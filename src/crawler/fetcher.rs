//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building one HTTP client per session, routed through the selected proxy
//! - Attaching a browser-like header profile to every request
//! - Enforcing the per-request timeout
//! - Folding every transport failure into a single [`FetchError`]

use crate::config::validate_proxy;
use crate::logging::CrawlLog;
use crate::{ConfigError, CrawlerError, FetchError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Proxy};
use std::sync::Arc;
use std::time::Duration;

/// Browser-like User-Agent sent with every request
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Accept header sent with every request
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Page body content
    pub body: String,
}

/// Builds an HTTP client routing both http and https traffic through `proxy`
///
/// # Arguments
///
/// * `proxy` - Proxy endpoint, `scheme://host:port`
/// * `timeout` - Per-request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(CrawlerError)` - Invalid proxy or client construction failure
///
/// # Example
///
/// ```no_run
/// use gh_search_crawler::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client("http://proxy1.com:8080", Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(proxy: &str, timeout: Duration) -> Result<Client, CrawlerError> {
    validate_proxy(proxy)?;

    let proxy = Proxy::all(proxy).map_err(|e| ConfigError::InvalidProxy {
        proxy: proxy.to_string(),
        reason: e.to_string(),
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));

    let client = Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(headers)
        .proxy(proxy)
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Issues GET requests through the session's shared client
///
/// Cloning is cheap: clones share the connection pool.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    log: Arc<dyn CrawlLog>,
}

impl HttpFetcher {
    /// Creates a fetcher bound to one proxy and timeout
    pub fn new(
        proxy: &str,
        timeout: Duration,
        log: Arc<dyn CrawlLog>,
    ) -> Result<Self, CrawlerError> {
        let client = build_http_client(proxy, timeout)?;
        Ok(Self { client, log })
    }

    /// Fetches `url` with optional query parameters
    ///
    /// Any status outside 2xx/3xx is reported as `FetchError::Status`.
    pub async fn fetch(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<FetchedPage, FetchError> {
        self.log.info(&format!("Making request to {}", url));

        match self.send(url, params).await {
            Ok(page) => {
                self.log
                    .info(&format!("Request successful: {}", page.status_code));
                Ok(page)
            }
            Err(e) => {
                self.log.error(&format!("Error making request: {}", e));
                Err(e)
            }
        }
    }

    async fn send(&self, url: &str, params: &[(&str, &str)]) -> Result<FetchedPage, FetchError> {
        let mut request = self.client.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let body = response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            source: e,
        })?;

        Ok(FetchedPage {
            url: final_url,
            status_code: status.as_u16(),
            body,
        })
    }
}

/// Maps a reqwest send error onto the matching `FetchError` variant
fn classify_error(url: &str, e: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if e.is_timeout() {
        FetchError::Timeout { url, source: e }
    } else if e.is_connect() {
        FetchError::Connect { url, source: e }
    } else {
        FetchError::Request { url, source: e }
    }
}
