//! Link extraction from HTML text
//!
//! Links are found with a pattern scan over the raw document rather than a
//! DOM parse. Every `href="..."` occurrence counts, wherever it appears, so
//! malformed or oddly nested markup still yields its links.

use once_cell::sync::Lazy;
use regex::Regex;

static HREF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"href="([^"]*)""#).expect("href pattern is a valid regex"));

/// Extracts link targets from an HTML document, in document order
///
/// # Resolution Rules
///
/// - A value starting with `/` is joined onto `base` with exactly one `/`
///   between them
/// - Any other value is returned verbatim
///
/// Duplicates are kept. A document without matches yields nothing.
///
/// # Arguments
///
/// * `html` - The document text
/// * `base` - The origin root-relative links are resolved against
///
/// # Example
///
/// ```
/// use link_census::crawler::extract_links;
///
/// let html = r#"<a href="/a">A</a><a href="https://other.com/b">B</a>"#;
/// let links: Vec<String> = extract_links(html, "https://example.com").collect();
/// assert_eq!(links, vec!["https://example.com/a", "https://other.com/b"]);
/// ```
pub fn extract_links<'a>(html: &'a str, base: &'a str) -> impl Iterator<Item = String> + 'a {
    HREF_PATTERN
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(move |value| resolve_link(value.as_str(), base))
}

fn resolve_link(href: &str, base: &str) -> String {
    match href.strip_prefix('/') {
        Some(rest) => format!("{}/{}", base.trim_end_matches('/'), rest),
        None => href.to_string(),
    }
}
