// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a URL
// - Respects same-domain restriction (doesn't crawl external sites)
// - Retries a missing page under each alternate root path before giving up
// - Never sends the same concrete request twice
// - Polite crawling with a fixed delay before every request
//
// Submodules:
// - state: The frontier and the attempted/found sets for one crawl
// - queue: The traversal loop and path-candidate resolution
// - report: What a finished crawl hands back
// =============================================================================

mod queue;
mod report;
mod state;

use anyhow::Result;

use crate::config::CrawlConfig;

pub use queue::Crawler;
pub use report::CrawlReport;

/// Crawls the site described by `config` until the frontier is empty.
///
/// Only configuration problems are errors. Unreachable pages are logged and
/// listed in the report's failures.
pub async fn crawl_site(config: CrawlConfig) -> Result<CrawlReport> {
    let crawler = Crawler::new(config)?;
    Ok(crawler.run().await)
}
