// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's HTTP collaborator.
//
// Submodules:
// - http: One reqwest client, one GET at a time, failures categorized
//
// The crawl engine only ever sees `PageFetcher::fetch` and `FetchError`.
// It never touches reqwest directly.
// =============================================================================

mod http;

pub use http::PageFetcher;
