// src/crawl/queue.rs
// =============================================================================
// This module implements website crawling with a breadth-first approach.
//
// How it works:
// 1. Start with the start URL in the frontier
// 2. Pop the oldest URL and try it under each path candidate, in order,
//    until one answers 2xx
// 3. Record the URL that answered (which may be a rewritten one)
// 4. Run every link on that page through the link filter and queue the
//    ones we have not seen
// 5. Repeat until the frontier is empty
//
// Politeness:
// - Sleeps a fixed delay before every single request
// - Exactly one request is in flight at any time
// - Only crawls the start URL's host
//
// A page that fails under every candidate is logged and skipped. It never
// stops the crawl.
// =============================================================================

use anyhow::Result;
use std::time::Instant;

use super::report::{CrawlReport, FailedAttempt, FailedEntry};
use super::state::CrawlState;
use crate::config::{duration_millis, CrawlConfig};
use crate::fetch::PageFetcher;
use crate::links::{extract_hrefs, LinkFilter};

// What happened when we tried one frontier entry
enum Resolution {
    /// A candidate answered 2xx
    Found { url: String, body: String },
    /// Every candidate we were allowed to try failed
    Exhausted(Vec<FailedAttempt>),
    /// Every candidate had already been requested by earlier entries
    AlreadyAttempted,
}

/// Owns everything one crawl needs: configuration, HTTP client, link filter
/// and traversal state.
pub struct Crawler {
    config: CrawlConfig,
    fetcher: PageFetcher,
    filter: LinkFilter,
    state: CrawlState,
    failures: Vec<FailedEntry>,
}

impl Crawler {
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let fetcher = PageFetcher::new(&config.user_agent, config.timeout)?;
        let filter = LinkFilter::new(&config)?;
        let state = CrawlState::new(&config.start_url);

        Ok(Self {
            config,
            fetcher,
            filter,
            state,
            failures: Vec::new(),
        })
    }

    /// Crawls until the frontier is empty and returns the report.
    pub async fn run(mut self) -> CrawlReport {
        let started = Instant::now();

        tracing::info!("Starting crawl at: {}", self.config.start_url);
        tracing::info!("Domain to crawl: {}", self.config.scope);
        tracing::debug!("Path candidates: {:?}", self.config.path_candidates);

        while let Some(current) = self.state.pop() {
            // Already requested as some earlier entry's candidate, whether it
            // worked or not. Trying its other candidates would alias a page
            // that was already accepted.
            if self.state.is_attempted(&current) {
                tracing::debug!("Skipping already attempted URL: {}", current);
                continue;
            }

            let (resolved, body) = match self.resolve(&current).await {
                Resolution::Found { url, body } => (url, body),
                Resolution::AlreadyAttempted => {
                    tracing::debug!("Skipping already attempted URL: {}", current);
                    continue;
                }
                Resolution::Exhausted(tried) => {
                    let tried_urls: Vec<&str> = tried.iter().map(|a| a.url.as_str()).collect();
                    tracing::warn!(
                        "Failed to retrieve {} (tried: {})",
                        current,
                        tried_urls.join(", ")
                    );
                    self.failures.push(FailedEntry { url: current, tried });
                    continue;
                }
            };

            if resolved == current {
                tracing::info!("Found: {}", resolved);
            } else {
                tracing::info!("Found: {} (was: {})", resolved, current);
            }
            self.state.record_found(resolved);

            self.enqueue_links(&body);
        }

        let report = CrawlReport {
            start_url: self.config.start_url.clone(),
            config: self.config,
            requests: self.state.attempted_count(),
            failures: self.failures,
            found: self.state.into_found(),
            duration_ms: duration_millis(started.elapsed()),
        };

        tracing::info!("Crawl finished. Found {} unique pages.", report.found.len());
        report
    }

    // Tries `url` under each path candidate, in order, and stops at the first
    // one that answers 2xx.
    //
    // Candidate URLs that were already requested (by this entry or any
    // earlier one) are skipped, never re-sent.
    async fn resolve(&mut self, url: &str) -> Resolution {
        let mut tried = Vec::new();

        for candidate in &self.config.path_candidates {
            let test_url = candidate.apply(url);

            // Marked before the request so a failure is never retried
            if !self.state.mark_attempted(&test_url) {
                continue;
            }

            tokio::time::sleep(self.config.delay).await;

            match self.fetcher.fetch(&test_url).await {
                Ok(body) => {
                    return Resolution::Found {
                        url: test_url,
                        body,
                    }
                }
                Err(e) => {
                    tracing::debug!("Candidate {} failed: {}", test_url, e);
                    tried.push(FailedAttempt {
                        url: test_url,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if tried.is_empty() {
            Resolution::AlreadyAttempted
        } else {
            Resolution::Exhausted(tried)
        }
    }

    // Filters every link on the page and queues the new ones
    fn enqueue_links(&mut self, body: &str) {
        let hrefs = extract_hrefs(body);
        let mut added = 0;

        for href in &hrefs {
            match self.filter.admit(href) {
                // enqueue() refuses anything already attempted or queued
                Ok(link) => {
                    if self.state.enqueue(link) {
                        added += 1;
                    }
                }
                Err(reason) => {
                    tracing::trace!("Ignoring link {:?}: {}", href, reason);
                }
            }
        }

        tracing::debug!(
            "{} links on page, {} queued, frontier size {}",
            hrefs.len(),
            added,
            self.state.frontier_len()
        );
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does run() take `self` and not `&mut self`?
//    - A Crawler is good for exactly one crawl
//    - Taking ownership lets run() move the found set into the report
//      without cloning it
//
// 2. Why is the sleep *before* the request?
//    - It guarantees a gap between any two requests, including the first
//      request of one frontier entry and the last request of the previous one
//
// 3. Why can an entry be skipped without any request?
//    - `attempted` holds concrete candidate URLs, not queued URLs
//    - An earlier entry's rewrite may already have requested this exact URL,
//      in which case the entry is dropped before any candidate is tried
//
// 4. Why can the same page name be queued again after it failed?
//    - Only the concrete URLs that were requested are remembered
//    - /docs/y/a.html is a new URL even if /docs/x/a.html failed, but its
//      rewrite /docs/reference/a.html is not sent a second time
// -----------------------------------------------------------------------------
