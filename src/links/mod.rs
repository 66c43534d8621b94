// src/links/mod.rs
// =============================================================================
// This module turns a fetched page into the next URLs to crawl.
//
// Submodules:
// - html: Pulls raw href values out of <a> tags
// - filter: Resolves, canonicalizes and admits (or rejects) each href
//
// The two are kept apart because extraction knows about HTML and nothing
// else, while filtering knows about URLs and nothing about HTML.
// =============================================================================

mod filter;
mod html;

pub use filter::LinkFilter;
pub use html::extract_hrefs;
