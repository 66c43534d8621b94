// src/fetch/http.rs
// =============================================================================
// This module downloads pages over HTTP.
//
// Key functionality:
// - Builds a single reqwest client with our user agent and timeout
// - Issues one GET request per call (the crawler never runs two at once)
// - Treats any non-2xx status as a failure
// - Sorts network failures into categories (timeout, DNS, TLS, ...) so the
//   crawl log says *why* a candidate URL did not work
//
// Rust concepts:
// - thiserror: Derives Display and std::error::Error for our error enum
// - async/await: reqwest is async, we simply await each request in turn
// =============================================================================

use reqwest::Client;
use std::time::Duration;

/// Why a single GET did not produce a usable page.
///
/// Every variant is recoverable: the crawler moves on to the next path
/// candidate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Server answered, but not with 2xx
    #[error("HTTP {0}")]
    Status(u16),
    #[error("request timed out")]
    Timeout,
    #[error("could not resolve hostname")]
    Dns,
    #[error("connection failed")]
    Connect,
    #[error("SSL certificate error")]
    Tls,
    #[error("too many redirects")]
    TooManyRedirects,
    /// reqwest refused to build the request (malformed URL)
    #[error("invalid URL")]
    InvalidUrl,
    #[error("{0}")]
    Other(String),
}

/// Thin wrapper around a reqwest client configured for crawling.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a fetcher that sends `user_agent` and gives up after `timeout`.
    pub fn new(user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns the response body.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // A body that fails to decode is as useless as a failed request
        response.text().await.map_err(categorize_error)
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
// - etc.
fn categorize_error(error: reqwest::Error) -> FetchError {
    // Convert error to string once so we can search it for hints
    let error_string = format!("{:?}", error).to_lowercase();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_builder() {
        FetchError::InvalidUrl
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            FetchError::Dns
        } else if error_string.contains("certificate") || error_string.contains("tls") {
            FetchError::Tls
        } else {
            FetchError::Connect
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        FetchError::Tls
    } else {
        FetchError::Other(error.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why one Client for the whole crawl?
//    - reqwest::Client keeps a connection pool inside
//    - Reusing it means we reconnect to the same host far less often
//
// 2. Why is the user agent set on the client and not per request?
//    - Every request the crawler makes must carry the same identifying header
//    - Setting it once on the builder makes it impossible to forget
//
// 3. What does map_err do?
//    - It converts the error inside a Result into another error type
//    - Here: reqwest::Error -> FetchError, so `?` works in fetch()
// -----------------------------------------------------------------------------
