//! Injected logging capability
//!
//! The crawler reports its lifecycle (proxy selection, requests, parse counts,
//! enrichment) through [`CrawlLog`] instead of a process-wide logger, so callers
//! decide where those messages go.

/// Sink for crawler lifecycle messages
///
/// Shared by every enrichment worker, hence `Send + Sync`.
pub trait CrawlLog: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards messages to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl CrawlLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl CrawlLog for NoopLog {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
