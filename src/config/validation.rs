use crate::config::types::{Config, CrawlerConfig, FetcherConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// Checks that:
/// - The default scheme is a `scheme://` prefix
/// - The default suffix starts with a dot and is a plain label
/// - The user agent name and version are non-empty
/// - Any contact URL parses
/// - Fetcher timeouts are positive
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler(&config.crawler)?;
    validate_user_agent(&config.user_agent)?;
    validate_fetcher(&config.fetcher)?;
    Ok(())
}

fn validate_crawler(crawler: &CrawlerConfig) -> Result<(), ConfigError> {
    let scheme = crawler
        .default_scheme
        .strip_suffix("://")
        .ok_or_else(|| {
            ConfigError::Validation(format!(
                "default-scheme '{}' must end with '://'",
                crawler.default_scheme
            ))
        })?;

    let mut chars = scheme.chars();
    let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return Err(ConfigError::Validation(format!(
            "default-scheme '{}' is not a valid URL scheme",
            crawler.default_scheme
        )));
    }

    let label = crawler.default_suffix.strip_prefix('.').ok_or_else(|| {
        ConfigError::Validation(format!(
            "default-suffix '{}' must start with '.'",
            crawler.default_suffix
        ))
    })?;

    if label.is_empty()
        || !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return Err(ConfigError::Validation(format!(
            "default-suffix '{}' contains invalid characters",
            crawler.default_suffix
        )));
    }

    Ok(())
}

fn validate_user_agent(user_agent: &UserAgentConfig) -> Result<(), ConfigError> {
    if user_agent.crawler_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if user_agent.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler-version cannot be empty".to_string(),
        ));
    }

    if let Some(contact) = &user_agent.contact_url {
        Url::parse(contact).map_err(|e| {
            ConfigError::Validation(format!("Invalid contact-url '{}': {}", contact, e))
        })?;
    }

    Ok(())
}

fn validate_fetcher(fetcher: &FetcherConfig) -> Result<(), ConfigError> {
    if fetcher.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be greater than 0".to_string(),
        ));
    }

    if fetcher.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_scheme() {
        let mut config = Config::default();

        config.crawler.default_scheme = "http://".to_string();
        assert!(validate(&config).is_ok());

        config.crawler.default_scheme = "https".to_string();
        assert!(validate(&config).is_err());

        config.crawler.default_scheme = "://".to_string();
        assert!(validate(&config).is_err());

        config.crawler.default_scheme = "1http://".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_suffix() {
        let mut config = Config::default();

        config.crawler.default_suffix = ".co.uk".to_string();
        assert!(validate(&config).is_ok());

        config.crawler.default_suffix = "com".to_string();
        assert!(validate(&config).is_err());

        config.crawler.default_suffix = ".".to_string();
        assert!(validate(&config).is_err());

        config.crawler.default_suffix = ".c/m".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_user_agent() {
        let mut config = Config::default();
        config.user_agent.crawler_name = "  ".to_string();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.user_agent.contact_url = Some("not a url".to_string());
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.user_agent.contact_url = Some("https://example.com/bot".to_string());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_timeouts() {
        let mut config = Config::default();
        config.fetcher.connect_timeout_secs = 0;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }
}
