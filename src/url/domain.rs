/// Returns the base token of a normalized URL: everything before the first `/`
///
/// For keys produced by [`normalize_url`](super::normalize_url) this is the
/// `host[:port]` part, which the report uses to partition links.
///
/// # Examples
///
/// ```
/// use link_census::url::base_token;
///
/// assert_eq!(base_token("example.com/path/to"), "example.com");
/// assert_eq!(base_token("example.com:8080/a"), "example.com:8080");
/// assert_eq!(base_token("example.com"), "example.com");
/// ```
pub fn base_token(normalized: &str) -> &str {
    normalized
        .split_once('/')
        .map_or(normalized, |(base, _)| base)
}
