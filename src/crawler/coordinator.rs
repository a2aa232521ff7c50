//! Crawler coordinator - main crawl orchestration logic
//!
//! The crawl is a depth-first walk over the origin's link graph. Instead of
//! recursing, pending links live on an explicit stack: a page's links are
//! pushed in reverse so the first link is visited next, and its whole
//! subtree is finished before its next sibling. This is exactly the order a
//! recursive walk produces, without tying crawl depth to the call stack.

use crate::crawler::parser::extract_links;
use crate::crawler::Fetcher;
use crate::state::{Visit, VisitTable};
use crate::url::{normalize_url, Origin, OriginPolicy};
use crate::CensusError;

/// Counters collected during a crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Pages fetched successfully and scanned for links
    pub pages_fetched: u64,

    /// First visits whose fetch did not yield HTML
    pub pages_unfetchable: u64,

    /// Visits to pages that were already in the table
    pub repeat_visits: u64,

    /// Links dropped because they lie outside the origin
    pub links_discarded: u64,
}

/// Single-origin crawler
///
/// Owns the fetcher; every call to [`Crawler::crawl`] starts from an empty
/// [`VisitTable`] that no other crawl can observe.
#[derive(Debug, Clone)]
pub struct Crawler<F> {
    fetcher: F,
    origin_policy: OriginPolicy,
}

impl<F: Fetcher> Crawler<F> {
    /// Creates a crawler that uses the raw-prefix origin test
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            origin_policy: OriginPolicy::default(),
        }
    }

    pub fn with_origin_policy(mut self, policy: OriginPolicy) -> Self {
        self.origin_policy = policy;
        self
    }

    /// Crawls everything reachable from `seed` inside its origin
    ///
    /// # Visit Rules
    ///
    /// For each address, in depth-first document order:
    /// 1. Outside the origin → discarded, not counted
    /// 2. Normalized key already in the table → count incremented, nothing
    ///    fetched
    /// 3. New key → inserted with count 1 and fetched; a page that cannot be
    ///    fetched stays in the table but is not followed
    /// 4. Links of a fetched page are resolved against the seed and visited
    ///    in order
    ///
    /// # Returns
    ///
    /// * `Ok(VisitTable)` - Every page reached and its reference count
    /// * `Err(CensusError)` - The seed or an in-origin link could not be
    ///   normalized; the partial table is discarded
    pub async fn crawl(&self, seed: &str) -> Result<VisitTable, CensusError> {
        self.crawl_with_stats(seed).await.map(|(table, _)| table)
    }

    /// Same as [`Crawler::crawl`], also returning the crawl counters
    pub async fn crawl_with_stats(
        &self,
        seed: &str,
    ) -> Result<(VisitTable, CrawlStats), CensusError> {
        let origin =
            Origin::new(seed, self.origin_policy).map_err(|e| CensusError::InvalidSeed {
                seed: seed.to_string(),
                reason: e.reason,
            })?;

        tracing::info!(
            "Starting crawl of {} (origin match: {:?})",
            origin.seed(),
            origin.policy()
        );

        let mut table = VisitTable::new();
        let mut stats = CrawlStats::default();
        let mut pending = vec![origin.seed().to_string()];

        while let Some(url) = pending.pop() {
            if !origin.contains(&url) {
                tracing::debug!("Skipping {} (outside origin)", url);
                stats.links_discarded += 1;
                continue;
            }

            let key = normalize_url(&url)?;

            if let Visit::Repeat(count) = table.record(&key) {
                tracing::debug!("Revisited {} ({} references)", key, count);
                stats.repeat_visits += 1;
                continue;
            }

            tracing::debug!("Fetching {}", url);
            let result = self.fetcher.fetch(&url).await;

            let Some(html) = result.html() else {
                let reason = result.failure_reason().unwrap_or_default();
                tracing::warn!("Not following {}: {}", url, reason);
                stats.pages_unfetchable += 1;
                continue;
            };

            stats.pages_fetched += 1;

            let links: Vec<String> = extract_links(html, origin.seed()).collect();
            tracing::debug!("Found {} links on {}", links.len(), url);

            pending.extend(links.into_iter().rev());
        }

        tracing::info!(
            "Crawl finished: {} pages, {} fetched, {} not fetchable, {} repeat visits, {} links outside origin",
            table.len(),
            stats.pages_fetched,
            stats.pages_unfetchable,
            stats.repeat_visits,
            stats.links_discarded
        );

        Ok((table, stats))
    }
}
