// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The positional arguments follow the order people already type:
//   doc-crawler [START_URL] [OUTPUT] [--extra-paths "reference tutorials"]
//
// Everything has a default, so running `doc-crawler` with no arguments
// crawls the default documentation site into discovered_urls.txt.
// =============================================================================

use clap::Parser;
use std::time::Duration;

use crate::config::{
    duration_millis, DEFAULT_DELAY, DEFAULT_EXTRA_PATHS, DEFAULT_OUTPUT_FILE, DEFAULT_START_URL,
    DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};

#[derive(Parser, Debug)]
#[command(
    name = "doc-crawler",
    version,
    about = "Crawl a documentation site and list every page that can be fetched",
    long_about = "doc-crawler walks every same-site link under a start URL, breadth first. \
                  Pages that are missing where a link says they are get retried under each \
                  extra path. The sorted list of pages that answered is written one URL per line."
)]
pub struct Cli {
    /// URL to start crawling from (a trailing '/' is added if missing)
    #[arg(default_value = DEFAULT_START_URL)]
    pub start_url: String,

    /// File to write the sorted URL list to, or '-' for stdout
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Space separated extra root paths to retry missing pages under
    ///
    /// Each one is tried as START_URL/<path>/<page name>, in order.
    #[arg(long, default_value = DEFAULT_EXTRA_PATHS)]
    pub extra_paths: String,

    /// Delay before every request, in milliseconds
    #[arg(long, default_value_t = duration_millis(DEFAULT_DELAY))]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print the full crawl report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn extra_paths(&self) -> Vec<&str> {
        self.extra_paths.split_whitespace().collect()
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
