//! Integration tests for the crawler
//!
//! These tests use wiremock as both the proxy and the upstream site: every
//! request targets `http://github.invalid`, which never resolves, so a
//! response can only come from the proxy.

use gh_search_crawler::config::{load_input, CrawlerConfig};
use gh_search_crawler::crawler::{crawl, Coordinator, FirstProxySelector};
use gh_search_crawler::{CrawlerError, FetchError, NoopLog, SearchQuery};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SITE: &str = "http://github.invalid";

const SEARCH_PAGE: &str = r#"
<html><body>
    <ul class="repo-list">
        <li><div class="f4 search-title"><a href="/octo/spider">octo/spider</a></div></li>
        <li><div class="f4 search-title"><a href="/crab/webcrawler">crab/webcrawler</a></div></li>
    </ul>
</body></html>
"#;

const SPIDER_PAGE: &str = r#"
<html><body>
    <div class="Layout-main">README</div>
    <div class="Layout-sidebar">
        <h2>Languages</h2>
        <ul>
            <li class="d-inline"><span>Python</span><span>80%</span></li>
            <li class="d-inline"><span>JavaScript</span><span>20%</span></li>
        </ul>
    </div>
</body></html>
"#;

const WEBCRAWLER_PAGE: &str = r#"
<html><body>
    <div class="Layout-sidebar">
        <ul>
            <li class="d-inline"><span>Rust</span><span>97.3%</span></li>
            <li class="d-inline"><span>Shell</span><span>2.7%</span></li>
        </ul>
    </div>
</body></html>
"#;

/// Creates a session routed through the mock server
fn create_coordinator(server: &MockServer, search_type: &str) -> Coordinator {
    let query = SearchQuery::new(
        vec!["python".to_string(), "crawler".to_string()],
        search_type,
        vec![server.uri()],
    )
    .expect("Failed to build query");

    let config = CrawlerConfig {
        base_url: SITE.to_string(),
        ..CrawlerConfig::default()
    };

    Coordinator::new(query, &config, &FirstProxySelector, Arc::new(NoopLog))
        .expect("Failed to create coordinator")
}

async fn mount_search_page(server: &MockServer, search_type: &str) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "python crawler"))
        .and(query_param("type", search_type))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_PAGE))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_detail_pages(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/octo/spider"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SPIDER_PAGE))
        .expect(expected_calls)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/crab/webcrawler"))
        .respond_with(ResponseTemplate::new(200).set_body_string(WEBCRAWLER_PAGE))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_repository_search_is_enriched_in_order() {
    let server = MockServer::start().await;
    mount_search_page(&server, "repositories").await;
    mount_detail_pages(&server, 1).await;

    let coordinator = create_coordinator(&server, "repositories");
    let results = coordinator.search().await.expect("Search failed");

    assert_eq!(results.len(), 2);

    assert_eq!(results[0].url, "/octo/spider");
    let spider = results[0].extra.as_ref().expect("Missing extra");
    assert_eq!(spider.owner, "octo");
    assert_eq!(spider.language_stats.len(), 2);
    assert_eq!(spider.language_stats["Python"], 80.0);
    assert_eq!(spider.language_stats["JavaScript"], 20.0);

    assert_eq!(results[1].url, "/crab/webcrawler");
    let webcrawler = results[1].extra.as_ref().expect("Missing extra");
    assert_eq!(webcrawler.owner, "crab");
    assert_eq!(webcrawler.language_stats["Rust"], 97.3);
    assert_eq!(webcrawler.language_stats["Shell"], 2.7);
}

#[tokio::test]
async fn test_issue_search_has_no_extra() {
    let server = MockServer::start().await;
    mount_search_page(&server, "issues").await;
    // Detail pages must not be touched for non-repository searches
    mount_detail_pages(&server, 0).await;

    let coordinator = create_coordinator(&server, "Issues");
    let results = coordinator.search().await.expect("Search failed");

    let urls: Vec<&str> = results.iter().map(|entry| entry.url.as_str()).collect();
    assert_eq!(urls, vec!["/octo/spider", "/crab/webcrawler"]);
    assert!(results.iter().all(|entry| entry.extra.is_none()));
}

#[tokio::test]
async fn test_run_writes_json_array() {
    let server = MockServer::start().await;
    mount_search_page(&server, "repositories").await;
    mount_detail_pages(&server, 1).await;

    let dir = tempdir().expect("Failed to create temp dir");
    let destination = dir.path().join("crawler_result.json");

    let coordinator = create_coordinator(&server, "repositories");
    let written = coordinator.run(&destination).await.expect("Run failed");
    assert_eq!(written, 2);

    let content = std::fs::read_to_string(&destination).expect("Missing output");
    let value: Value = serde_json::from_str(&content).expect("Invalid JSON");

    assert_eq!(
        value,
        json!([
            {
                "url": "/octo/spider",
                "extra": {
                    "owner": "octo",
                    "language_stats": {"Python": 80.0, "JavaScript": 20.0}
                }
            },
            {
                "url": "/crab/webcrawler",
                "extra": {
                    "owner": "crab",
                    "language_stats": {"Rust": 97.3, "Shell": 2.7}
                }
            }
        ])
    );
}

#[tokio::test]
async fn test_wiki_run_omits_extra_key() {
    let server = MockServer::start().await;
    mount_search_page(&server, "wikis").await;

    let dir = tempdir().expect("Failed to create temp dir");
    let destination = dir.path().join("wikis.json");

    let coordinator = create_coordinator(&server, "wikis");
    coordinator.run(&destination).await.expect("Run failed");

    let value: Value =
        serde_json::from_str(&std::fs::read_to_string(&destination).expect("Missing output"))
            .expect("Invalid JSON");
    assert_eq!(
        value,
        json!([{"url": "/octo/spider"}, {"url": "/crab/webcrawler"}])
    );
}

#[tokio::test]
async fn test_search_failure_produces_no_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().expect("Failed to create temp dir");
    let destination = dir.path().join("crawler_result.json");

    let coordinator = create_coordinator(&server, "repositories");
    let err = coordinator.run(&destination).await.unwrap_err();

    assert!(matches!(
        err,
        CrawlerError::Fetch(FetchError::Status { status: 429, .. })
    ));
    assert!(!destination.exists());
}

#[tokio::test]
async fn test_unreachable_proxy_is_fetch_error() {
    let query = SearchQuery::new(
        vec!["python".to_string()],
        "repositories",
        vec!["http://127.0.0.1:9".to_string()],
    )
    .expect("Failed to build query");
    let config = CrawlerConfig {
        base_url: SITE.to_string(),
        request_timeout_secs: 2,
        ..CrawlerConfig::default()
    };
    let coordinator = Coordinator::new(query, &config, &FirstProxySelector, Arc::new(NoopLog))
        .expect("Failed to create coordinator");

    let err = coordinator.search().await.unwrap_err();
    assert!(matches!(
        err,
        CrawlerError::Fetch(FetchError::Connect { .. })
    ));
}

#[tokio::test]
async fn test_crawl_from_input_file() {
    let server = MockServer::start().await;
    mount_search_page(&server, "repositories").await;
    mount_detail_pages(&server, 1).await;

    let dir = tempdir().expect("Failed to create temp dir");
    let input_path = dir.path().join("input_data.json");
    let destination = dir.path().join("crawler_result.json");

    let input = json!({
        "keywords": ["python", "crawler"],
        "type": "REPOSITORIES",
        "proxies": [server.uri()],
        "crawler": {"base-url": SITE, "max-concurrent-requests": 2}
    });
    let mut file = std::fs::File::create(&input_path).expect("Failed to create input");
    file.write_all(input.to_string().as_bytes())
        .expect("Failed to write input");

    let input = load_input(&input_path).expect("Failed to load input");
    let written = crawl(&input, &destination, Arc::new(NoopLog))
        .await
        .expect("Crawl failed");

    assert_eq!(written, 2);
    assert!(destination.exists());
}
