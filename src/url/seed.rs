use crate::config::CrawlerConfig;
use crate::CensusError;
use url::Url;

/// Turns user input into the seed address a crawl starts from
///
/// - Appends `default_suffix` when the input contains no `.`
/// - Prepends `default_scheme` when the input has no `://`
/// - Rejects the result unless it parses as a URL with a host
///
/// The returned string is the raw form of the seed; it is not normalized,
/// because the crawl origin is matched against it verbatim.
///
/// # Examples
///
/// ```
/// use link_census::config::CrawlerConfig;
/// use link_census::url::prepare_seed;
///
/// let config = CrawlerConfig::default();
/// assert_eq!(prepare_seed("google", &config).unwrap(), "https://google.com");
/// assert_eq!(prepare_seed("http://example.org/", &config).unwrap(), "http://example.org/");
/// ```
pub fn prepare_seed(input: &str, config: &CrawlerConfig) -> Result<String, CensusError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid_seed(input, "seed is empty"));
    }

    let mut seed = trimmed.to_string();

    if !seed.contains('.') {
        seed.push_str(&config.default_suffix);
    }

    if !seed.contains("://") {
        seed.insert_str(0, &config.default_scheme);
    }

    let url = Url::parse(&seed).map_err(|e| invalid_seed(&seed, &e.to_string()))?;
    if url.host_str().is_none() {
        return Err(invalid_seed(&seed, "URL has no host"));
    }

    Ok(seed)
}

fn invalid_seed(seed: &str, reason: &str) -> CensusError {
    CensusError::InvalidSeed {
        seed: seed.to_string(),
        reason: reason.to_string(),
    }
}
