//! HTML parsing for search result pages and repository detail pages
//!
//! This module extracts:
//! - Result links from the search results page (in document order)
//! - The language breakdown from a repository page's sidebar
//!
//! Missing or malformed elements never raise: they simply contribute nothing.

use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

/// Container wrapping each search result title
const RESULT_TITLE_SELECTOR: &str = "div.search-title";

/// Sidebar region of a repository page
const SIDEBAR_SELECTOR: &str = "div.Layout-sidebar";

/// One language entry inside the sidebar
const LANGUAGE_ENTRY_SELECTOR: &str = "li.d-inline";

/// Extracts result URLs from a search results page
///
/// Takes the `href` of the first anchor inside every result title container.
/// Containers without an anchor, and anchors without an `href`, are skipped.
///
/// # Example
///
/// ```
/// use gh_search_crawler::crawler::parse_search_results;
///
/// let html = r#"<div class="search-title"><a href="/owner/repo">repo</a></div>"#;
/// assert_eq!(parse_search_results(html), vec!["/owner/repo".to_string()]);
/// ```
pub fn parse_search_results(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let (Ok(title_selector), Ok(anchor_selector)) =
        (Selector::parse(RESULT_TITLE_SELECTOR), Selector::parse("a"))
    else {
        return Vec::new();
    };

    document
        .select(&title_selector)
        .filter_map(|title| title.select(&anchor_selector).next())
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Extracts the language breakdown from a repository detail page
///
/// Each entry holds two spans, a language name and a percentage such as `80%`.
/// Entries that do not match that shape, or whose percentage is not a number
/// between 0 and 100, are skipped; a repeated language keeps
/// its last value. A page without a sidebar yields an empty map.
pub fn parse_language_stats(html: &str) -> BTreeMap<String, f64> {
    let document = Html::parse_document(html);
    let mut stats = BTreeMap::new();

    let (Ok(sidebar_selector), Ok(entry_selector), Ok(span_selector)) = (
        Selector::parse(SIDEBAR_SELECTOR),
        Selector::parse(LANGUAGE_ENTRY_SELECTOR),
        Selector::parse("span"),
    ) else {
        return stats;
    };

    let Some(sidebar) = document.select(&sidebar_selector).next() else {
        return stats;
    };

    for entry in sidebar.select(&entry_selector) {
        let spans: Vec<String> = entry.select(&span_selector).map(element_text).collect();

        let [name, percentage] = spans.as_slice() else {
            tracing::debug!("Skipping language entry with {} spans", spans.len());
            continue;
        };

        match parse_percentage(percentage) {
            Some(value) => {
                stats.insert(name.clone(), value);
            }
            None => {
                tracing::debug!("Skipping language {} with percentage {:?}", name, percentage);
            }
        }
    }

    stats
}

/// Parses `"80%"` / `"12.5 %"` into a float within 0..=100
fn parse_percentage(text: &str) -> Option<f64> {
    let value: f64 = text.trim().trim_end_matches('%').trim().parse().ok()?;
    (value.is_finite() && (0.0..=100.0).contains(&value)).then_some(value)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
