use crate::InvalidUrlError;
use icu_collator::{Collator, CollatorOptions};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;
use url::Url;

/// Characters left untouched when re-encoding a URI component
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Normalizes a URL into the key used to identify a page
///
/// The key has no scheme and no fragment: `host[:port][/path][?query]`.
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed or hostless. Drop the fragment
/// 2. A path of exactly `/` becomes empty
/// 3. Strip a trailing `/` from the host
/// 4. Drop the port when it is the scheme default (80/http, 443/https)
/// 5. A path of exactly `/index.html` becomes empty
/// 6. Remove the `www.` prefix from the host
/// 7. Stable-sort query parameters by key, using root-locale collation
/// 8. Decode path and query once, then re-encode them, so any number of
///    encoding layers collapses to exactly one. A `%` escape that is not two
///    hex digits, or that decodes to invalid UTF-8, is rejected
/// 9. Restore `%`, `?`, `=`, `&` in the query and `%` in the path; drop
///    every `%2F`
/// 10. Reassemble, leaving a single `?` before the query
///
/// # Examples
///
/// ```
/// use link_census::url::normalize_url;
///
/// assert_eq!(normalize_url("https://www.google.com:443/index.html").unwrap(), "google.com");
/// assert_eq!(
///     normalize_url("https://x.com/p?q=cats&client=firefox").unwrap(),
///     "x.com/p?client=firefox&q=cats"
/// );
/// ```
pub fn normalize_url(url_str: &str) -> Result<String, InvalidUrlError> {
    // Step 1: Parse the URL
    let url = Url::parse(url_str).map_err(|e| invalid(url_str, e.to_string()))?;
    let host = url
        .host_str()
        .ok_or_else(|| invalid(url_str, "URL has no host".to_string()))?
        .to_ascii_lowercase();

    // Step 2: Root path is empty
    let mut path = url.path();
    if path == "/" {
        path = "";
    }

    // Step 3: Trailing slash on the host
    let host = host.strip_suffix('/').unwrap_or(&host);

    // Step 4: Default ports
    let port = match (url.scheme(), url.port()) {
        ("http", Some(80)) | ("https", Some(443)) => None,
        (_, port) => port,
    };

    // Step 5: Default landing file
    if path == "/index.html" {
        path = "";
    }

    // Step 6: Default subdomain
    let host = host.strip_prefix("www.").unwrap_or(host);

    // Step 7: Sort query parameters
    let query = sorted_query(url_str, &url)?;

    // Steps 8 & 9: Collapse encodings
    let path = reencode_path(url_str, path)?;
    let query = reencode_query(url_str, &query)?;

    // Step 10: Reassemble
    let mut normalized = match port {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };
    normalized.push_str(&path);

    let query: String = query.chars().filter(|&c| c != '?').collect();
    if !query.is_empty() {
        normalized.push('?');
        normalized.push_str(&query);
    }

    Ok(normalized)
}

fn invalid(url_str: &str, reason: String) -> InvalidUrlError {
    InvalidUrlError {
        url: url_str.to_string(),
        reason,
    }
}

/// Re-serializes the query with parameters stable-sorted by key
///
/// Keys are ordered by root-locale collation, so `a` sorts before `B` and
/// punctuation sorts before letters.
fn sorted_query(url_str: &str, url: &Url) -> Result<String, InvalidUrlError> {
    let mut params: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    if params.len() > 1 {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| invalid(url_str, format!("collation unavailable: {}", e)))?;
        params.sort_by(|a, b| collator.compare(&a.0, &b.0));
    }

    Ok(form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish())
}

/// Percent-decodes `component` exactly once
///
/// Fails on a `%` not followed by two hex digits and on escapes that do not
/// form valid UTF-8.
fn decode_once(url_str: &str, component: &str) -> Result<String, InvalidUrlError> {
    let bytes = component.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != b'%' {
            continue;
        }
        let well_formed = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(invalid(url_str, "malformed percent escape".to_string()));
        }
    }

    percent_decode_str(component)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| invalid(url_str, format!("percent escape is not UTF-8: {}", e)))
}

/// Segments are encoded one at a time so `/` separators survive
///
/// Encoding the path as a single component would turn every separator into
/// `%2F` and then drop it, collapsing `/a/b` into `/ab`. Separators are kept
/// on purpose; only `%2F` produced from an encoded slash is removed.
fn reencode_path(url_str: &str, path: &str) -> Result<String, InvalidUrlError> {
    Ok(decode_once(url_str, path)?
        .split('/')
        .map(|segment| utf8_percent_encode(segment, COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
        .replace("%25", "%")
        .replace("%2F", ""))
}

fn reencode_query(url_str: &str, query: &str) -> Result<String, InvalidUrlError> {
    Ok(utf8_percent_encode(&decode_once(url_str, query)?, COMPONENT)
        .to_string()
        .replace("%25", "%")
        .replace("%3F", "?")
        .replace("%3D", "=")
        .replace("%26", "&")
        .replace("%2F", ""))
}
