//! gh-search-crawler main entry point
//!
//! This is the command-line interface for the search crawler.

use anyhow::Context;
use clap::Parser;
use gh_search_crawler::config::load_input_with_hash;
use gh_search_crawler::crawler::crawl;
use gh_search_crawler::TracingLog;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// gh-search-crawler: search a code-hosting site through a proxy
///
/// Reads keywords, a search type (repositories, issues or wikis) and a list
/// of proxies from the input file, runs the search and writes the result
/// links, enriched with owner and language stats for repositories, as JSON.
#[derive(Parser, Debug)]
#[command(name = "gh-search-crawler")]
#[command(version = "1.0.0")]
#[command(about = "Proxied search crawler", long_about = None)]
struct Cli {
    /// Path to the JSON or TOML input file
    #[arg(value_name = "INPUT", default_value = "input_data.json")]
    input: PathBuf,

    /// Where to write the JSON results
    #[arg(short, long, value_name = "OUTPUT", default_value = "crawler_result.json")]
    output: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading input from: {}", cli.input.display());
    let (input, hash) = load_input_with_hash(&cli.input)
        .with_context(|| format!("Failed to load input from {}", cli.input.display()))?;
    tracing::info!("Input loaded successfully (hash: {})", hash);

    tracing::info!(
        "Initializing crawler with keywords: {:?}, search type: {}",
        input.keywords,
        input.search_type
    );

    match crawl(&input, &cli.output, Arc::new(TracingLog)).await {
        Ok(count) => {
            tracing::info!("Crawl completed successfully ({} results)", count);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gh_search_crawler=info,warn"),
            1 => EnvFilter::new("gh_search_crawler=debug,info"),
            2 => EnvFilter::new("gh_search_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
