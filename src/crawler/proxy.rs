//! Proxy endpoint selection
//!
//! A crawl session routes every request through one proxy, picked once when the
//! session is built. Selection is a trait so callers can pin the choice.

use crate::ConfigError;
use rand::seq::SliceRandom;

/// Picks one proxy endpoint from a candidate set
pub trait ProxySelector: Send + Sync {
    /// Returns one member of `candidates`, or `ConfigError::NoProxies` when it is empty
    fn select(&self, candidates: &[String]) -> Result<String, ConfigError>;
}

/// Uniformly random choice
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomProxySelector;

impl ProxySelector for RandomProxySelector {
    fn select(&self, candidates: &[String]) -> Result<String, ConfigError> {
        candidates
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(ConfigError::NoProxies)
    }
}

/// Always the first candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstProxySelector;

impl ProxySelector for FirstProxySelector {
    fn select(&self, candidates: &[String]) -> Result<String, ConfigError> {
        candidates.first().cloned().ok_or(ConfigError::NoProxies)
    }
}
