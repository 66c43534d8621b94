// src/crawl/report.rs
// =============================================================================
// The result of a finished crawl.
//
// #[derive(Serialize)] lets main.rs print the whole report with --json.
// =============================================================================

use serde::Serialize;

use crate::config::CrawlConfig;

/// One request that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedAttempt {
    /// The concrete URL that was requested
    pub url: String,
    /// Human readable failure, e.g. "HTTP 404"
    pub reason: String,
}

/// A frontier entry for which no path candidate worked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedEntry {
    /// The URL as it was queued
    pub url: String,
    /// Every candidate that was actually requested, in order
    pub tried: Vec<FailedAttempt>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub start_url: String,
    /// The configuration the crawl ran with
    pub config: CrawlConfig,
    /// Sorted, no duplicates
    pub found: Vec<String>,
    pub failures: Vec<FailedEntry>,
    /// Number of HTTP requests sent
    pub requests: usize,
    pub duration_ms: u64,
}

impl CrawlReport {
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_report_json_echoes_config() {
        let config = CrawlConfig::new("https://x.test/docs", &["reference"])
            .unwrap()
            .with_delay(Duration::from_millis(250));
        let report = CrawlReport {
            start_url: config.start_url.clone(),
            config,
            found: vec!["https://x.test/docs/".to_string()],
            failures: Vec::new(),
            requests: 1,
            duration_ms: 12,
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["config"]["scope"], "x.test");
        assert_eq!(json["config"]["delay"], 250);
        assert_eq!(json["config"]["timeout"], 10_000);
        assert_eq!(
            json["config"]["path_candidates"],
            serde_json::json!([
                { "kind": "identity" },
                { "kind": "prefix", "prefix": "https://x.test/docs/reference/" }
            ])
        );
        assert_eq!(json["found"][0], "https://x.test/docs/");
    }
}
