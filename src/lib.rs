//! Link-Census: a single-origin link frequency crawler
//!
//! This crate walks every page reachable from a seed address without leaving
//! the seed's origin, counts how many times each distinct page is linked to,
//! and groups the counts into a frequency report.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Link-Census operations
#[derive(Debug, Error)]
pub enum CensusError {
    #[error("Invalid seed URL '{seed}': {reason}")]
    InvalidSeed { seed: String, reason: String },

    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrlError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Raised when an address cannot be parsed into a normalizable URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid URL '{url}': {reason}")]
pub struct InvalidUrlError {
    pub url: String,
    pub reason: String,
}

/// Result type alias for Link-Census operations
pub type Result<T> = std::result::Result<T, CensusError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{crawl, Crawler, Fetcher, FetchResult, HttpFetcher};
pub use crate::output::{build_report, Report, ReportGroup};
pub use crate::state::VisitTable;
pub use crate::url::{normalize_url, prepare_seed, OriginPolicy};
