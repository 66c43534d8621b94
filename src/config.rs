// src/config.rs
// =============================================================================
// Crawl configuration, read once at startup and never changed afterwards.
//
// What lives here:
// - The normalized start URL (always ends with '/')
// - The domain scope (host and optional port of the start URL)
// - The ordered list of path candidates used to retry a page under
//   alternate roots (identity first)
// - Politeness delay, request timeout and user agent
//
// Building a CrawlConfig is the only place a configuration error can
// happen. It runs before any network activity.
// =============================================================================

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::time::Duration;
use url::{Position, Url};

use crate::canonical::{basename, collapse_slashes, ensure_trailing_slash};

pub const DEFAULT_START_URL: &str = "https://phenix-online.org/version_docs/2.0-5723";
pub const DEFAULT_OUTPUT_FILE: &str = "discovered_urls.txt";
pub const DEFAULT_EXTRA_PATHS: &str = "reference tutorials overviews";
pub const DEFAULT_USER_AGENT: &str =
    "MyWebsiteConverterBot/1.0 (+http://www.example.com/bot-info)";
pub const DEFAULT_DELAY: Duration = Duration::from_millis(10);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One way of rewriting a frontier URL before fetching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "prefix", rename_all = "snake_case")]
pub enum PathCandidate {
    /// Fetch the URL exactly as queued
    Identity,
    /// Re-root the URL's last path segment under this prefix
    Prefix(String),
}

impl PathCandidate {
    /// Builds the concrete URL to request for `url` under this candidate.
    ///
    /// The result is already canonical.
    pub fn apply(&self, url: &str) -> String {
        match self {
            PathCandidate::Identity => collapse_slashes(url),
            PathCandidate::Prefix(prefix) => {
                collapse_slashes(&format!("{}{}", prefix, basename(url)))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CrawlConfig {
    /// Normalized start URL, always ends with '/'
    pub start_url: String,
    /// Network location (host[:port]) every followed link must match
    pub scope: String,
    /// Identity first, then one prefix per extra path
    pub path_candidates: Vec<PathCandidate>,
    #[serde(serialize_with = "serialize_millis")]
    pub delay: Duration,
    #[serde(serialize_with = "serialize_millis")]
    pub timeout: Duration,
    pub user_agent: String,
}

impl CrawlConfig {
    /// Validates the start URL and builds the candidate list.
    ///
    /// Each extra path becomes the prefix `start_url/extra/`.
    pub fn new<S: AsRef<str>>(start_url: &str, extra_paths: &[S]) -> Result<Self> {
        let start_url = ensure_trailing_slash(start_url.trim());

        let parsed = Url::parse(&start_url)
            .map_err(|e| anyhow!("Invalid start URL '{}': {}", start_url, e))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(anyhow!(
                "Start URL must use http or https, got '{}': {}",
                parsed.scheme(),
                start_url
            ));
        }

        if parsed.host_str().is_none() {
            return Err(anyhow!("Start URL has no host: {}", start_url));
        }

        let scope = network_location(&parsed);

        // Links are compared against url-normalized strings, so the start
        // URL must be spelled the same way (default port dropped, host
        // lowercased, path percent-encoded)
        let start_url = collapse_slashes(parsed.as_str());

        let mut path_candidates = vec![PathCandidate::Identity];
        for extra in extra_paths {
            let extra = extra.as_ref().trim();
            if extra.is_empty() {
                continue;
            }
            let prefix = collapse_slashes(&format!("{}/{}/", start_url, extra));
            path_candidates.push(PathCandidate::Prefix(prefix));
        }

        Ok(Self {
            start_url,
            scope,
            path_candidates,
            delay: DEFAULT_DELAY,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// The `host[:port]` part of a URL, the same thing a browser shows as the
/// site's address.
pub fn network_location(url: &Url) -> String {
    url[Position::BeforeHost..Position::AfterPort].to_string()
}

/// Whole milliseconds in `d`, saturating at `u64::MAX`.
pub fn duration_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

fn serialize_millis<S>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_u64(duration_millis(*d))
}
