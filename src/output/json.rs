//! JSON persistence of crawl results

use crate::output::types::CrawlEntry;
use crate::output::OutputResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes results to `path` as a JSON array, replacing any existing file
///
/// # Example
///
/// ```no_run
/// use gh_search_crawler::output::{write_results, CrawlEntry};
/// use std::path::Path;
///
/// let results = vec![CrawlEntry::plain("/owner/repo".to_string())];
/// write_results(&results, Path::new("crawler_result.json")).unwrap();
/// ```
pub fn write_results(results: &[CrawlEntry], path: &Path) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, results)?;
    writer.flush()?;
    Ok(())
}

/// Serializes results to a JSON array string
pub fn to_json_string(results: &[CrawlEntry]) -> OutputResult<String> {
    Ok(serde_json::to_string(results)?)
}
