use crate::config::types::{CrawlInput, CrawlerConfig, SearchKind};
use crate::ConfigError;
use url::Url;

/// Proxy schemes reqwest can route through
const PROXY_SCHEMES: &[&str] = &["http", "https", "socks5", "socks5h"];

/// Validates the entire input record
pub fn validate(input: &CrawlInput) -> Result<(), ConfigError> {
    input.search_type.parse::<SearchKind>()?;
    validate_proxies(&input.proxies)?;
    validate_crawler_config(&input.crawler)?;
    Ok(())
}

/// Validates session tuning
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    let base_url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if base_url.scheme() != "http" && base_url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    if config.request_timeout_secs < 1 || config.request_timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be between 1 and 300, got {}",
            config.request_timeout_secs
        )));
    }

    if let Some(limit) = config.max_concurrent_requests {
        if !(1..=100).contains(&limit) {
            return Err(ConfigError::Validation(format!(
                "max-concurrent-requests must be between 1 and 100, got {}",
                limit
            )));
        }
    }

    Ok(())
}

/// Validates the proxy candidate set: non-empty, every entry `scheme://host:port`
fn validate_proxies(proxies: &[String]) -> Result<(), ConfigError> {
    if proxies.is_empty() {
        return Err(ConfigError::NoProxies);
    }

    for proxy in proxies {
        validate_proxy(proxy)?;
    }

    Ok(())
}

/// Validates a single proxy endpoint string
pub(crate) fn validate_proxy(proxy: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidProxy {
        proxy: proxy.to_string(),
        reason,
    };

    let url = Url::parse(proxy).map_err(|e| invalid(e.to_string()))?;

    if !PROXY_SCHEMES.contains(&url.scheme()) {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(search_type: &str, proxies: &[&str]) -> CrawlInput {
        CrawlInput {
            keywords: vec!["python".to_string()],
            search_type: search_type.to_string(),
            proxies: proxies.iter().map(|p| p.to_string()).collect(),
            crawler: CrawlerConfig::default(),
        }
    }

    #[test]
    fn test_validate_proxy() {
        assert!(validate_proxy("http://proxy1.com:8080").is_ok());
        assert!(validate_proxy("https://10.0.0.1:3128").is_ok());
        assert!(validate_proxy("socks5://127.0.0.1:1080").is_ok());

        assert!(validate_proxy("").is_err());
        assert!(validate_proxy("proxy1.com:8080").is_err());
        assert!(validate_proxy("ftp://proxy1.com:21").is_err());
    }

    #[test]
    fn test_validate_input() {
        assert!(validate(&input("repositories", &["http://p:8080"])).is_ok());
        assert!(validate(&input("Wikis", &["http://p:8080"])).is_ok());

        assert!(matches!(
            validate(&input("code", &["http://p:8080"])),
            Err(ConfigError::UnknownSearchKind(_))
        ));
        assert!(matches!(
            validate(&input("issues", &[])),
            Err(ConfigError::NoProxies)
        ));
    }

    #[test]
    fn test_validate_crawler_config() {
        let mut config = CrawlerConfig::default();
        assert!(validate_crawler_config(&config).is_ok());

        config.request_timeout_secs = 0;
        assert!(validate_crawler_config(&config).is_err());

        config = CrawlerConfig {
            max_concurrent_requests: Some(0),
            ..CrawlerConfig::default()
        };
        assert!(validate_crawler_config(&config).is_err());

        config = CrawlerConfig {
            base_url: "ftp://github.com".to_string(),
            ..CrawlerConfig::default()
        };
        assert!(validate_crawler_config(&config).is_err());

        config = CrawlerConfig {
            base_url: "not a url".to_string(),
            ..CrawlerConfig::default()
        };
        assert!(matches!(
            validate_crawler_config(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }
}
