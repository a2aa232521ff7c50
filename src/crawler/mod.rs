//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and response classification
//! - Link extraction from HTML
//! - The depth-first, single-origin crawl itself

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{CrawlStats, Crawler};
pub use fetcher::{build_http_client, fetch_url, FetchResult, Fetcher, HttpFetcher};
pub use parser::extract_links;

use crate::config::Config;
use crate::state::VisitTable;
use crate::url::prepare_seed;
use crate::CensusError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Apply the configured scheme/suffix defaults to `input`
/// 2. Build the HTTP client
/// 3. Walk the seed's origin and count references to every page
///
/// Seed validation happens before any network activity.
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `input` - The seed address as given by the user
///
/// # Returns
///
/// * `Ok(VisitTable)` - Reference counts for every page reached
/// * `Err(CensusError)` - Invalid seed, client setup failure, or an aborted crawl
pub async fn crawl(config: &Config, input: &str) -> Result<VisitTable, CensusError> {
    let seed = prepare_seed(input, &config.crawler)?;
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.fetcher)?;

    Crawler::new(fetcher)
        .with_origin_policy(config.crawler.origin_match)
        .crawl(&seed)
        .await
}
