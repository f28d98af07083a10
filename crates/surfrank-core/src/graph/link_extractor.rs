//! Link extraction from HTML pages

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ANCHOR_HREF_RE: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Extract raw `href` targets from anchor tags in HTML content.
///
/// Only double-quoted `href` attributes are recognized. Targets come back
/// verbatim and in document order, duplicates included; deciding which of
/// them name corpus pages is the builder's job.
pub fn extract_links(content: &str) -> Vec<String> {
    ANCHOR_HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}
