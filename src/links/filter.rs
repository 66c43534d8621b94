// src/links/filter.rs
// =============================================================================
// This module decides which discovered links are worth crawling.
//
// For every href found on a page, in this order:
// 1. Resolve it against the crawl's *start* URL (not the page it came from)
// 2. Drop it if it points at another host
// 3. Drop it if it is not http/https
// 4. Drop it if the path ends in a binary/document extension (.pdf, .zip...)
// 5. Strip the #fragment
// 6. Collapse duplicated slashes
// 7. Drop it if it has a query string or looks like a CGI endpoint
// 8. If it lives outside the start URL, fold it back under the start URL by
//    filename only
//
// Known limitation of step 8: pages with the same filename in different
// directories collapse onto one URL.
//
// The query and prefix checks are plain substring tests on the canonical
// URL string, not structural URL checks.
// =============================================================================

use anyhow::{anyhow, Result};
use url::Url;

use crate::canonical::{basename, collapse_slashes, strip_fragment};
use crate::config::{network_location, CrawlConfig};

/// File types that are never HTML pages.
const IGNORED_EXTENSIONS: &[&str] = &[
    ".pdf", ".jpg", ".jpeg", ".png", ".gif", ".zip", ".doc", ".docx", ".xls", ".xlsx", ".ppt",
    ".pptx", ".mp3", ".mp4",
];

/// Substrings that mark endpoints we never follow.
const IGNORED_TOKENS: &[&str] = &["?", "-cgi"];

/// Why a link was not admitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("cannot be resolved against the start URL")]
    Unresolvable,
    /// Host (or port) differs from the crawl scope
    #[error("off domain ({0})")]
    OffDomain(String),
    /// Not http or https (mailto:, ftp:, javascript: ...)
    #[error("unsupported scheme {0}")]
    Scheme(String),
    #[error("ignored file extension")]
    IgnoredExtension,
    /// Contains a query marker or a denylisted token
    #[error("contains {0:?}")]
    IgnoredToken(&'static str),
}

/// Resolves and filters discovered links for one crawl.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    base: Url,
    start_url: String,
    scope: String,
}

impl LinkFilter {
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        let base = Url::parse(&config.start_url)
            .map_err(|e| anyhow!("Invalid start URL '{}': {}", config.start_url, e))?;

        Ok(Self {
            base,
            start_url: config.start_url.clone(),
            scope: config.scope.clone(),
        })
    }

    /// Runs one href through every filtering step.
    ///
    /// Returns the canonical URL to queue, or the reason it was dropped.
    /// Frontier/attempted membership is not checked here, the crawler does
    /// that since it owns those sets.
    pub fn admit(&self, href: &str) -> Result<String, Rejection> {
        let absolute = self.base.join(href).map_err(|_| Rejection::Unresolvable)?;

        let location = network_location(&absolute);
        if location != self.scope {
            return Err(Rejection::OffDomain(location));
        }

        if absolute.scheme() != "http" && absolute.scheme() != "https" {
            return Err(Rejection::Scheme(absolute.scheme().to_string()));
        }

        let path = absolute.path().to_lowercase();
        if IGNORED_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
            return Err(Rejection::IgnoredExtension);
        }

        let clean = collapse_slashes(strip_fragment(&absolute).as_str());

        if let Some(token) = IGNORED_TOKENS.iter().copied().find(|token| clean.contains(token)) {
            return Err(Rejection::IgnoredToken(token));
        }

        if clean.contains(&self.start_url) {
            Ok(clean)
        } else {
            Ok(collapse_slashes(&format!(
                "{}{}",
                self.start_url,
                basename(&clean)
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn filter(start_url: &str) -> LinkFilter {
        let config = CrawlConfig::new::<&str>(start_url, &[]).unwrap();
        LinkFilter::new(&config).unwrap()
    }

    #[rstest]
    #[case("/a", "https://x.test/a")]
    #[case("a", "https://x.test/a")]
    #[case("https://x.test/b#intro", "https://x.test/b")]
    #[case("//x.test//deep//page", "https://x.test/deep/page")]
    // Plain http does not textually contain the https start URL, so it is folded
    #[case("http://x.test/plain", "https://x.test/plain")]
    fn test_admit_root_scope(#[case] href: &str, #[case] expected: &str) {
        assert_eq!(filter("https://x.test").admit(href), Ok(expected.to_string()));
    }

    #[rstest]
    #[case("https://other.test/page", Rejection::OffDomain("other.test".to_string()))]
    #[case("https://x.test:8443/page", Rejection::OffDomain("x.test:8443".to_string()))]
    #[case("mailto:someone@x.test", Rejection::OffDomain(String::new()))]
    #[case("/a.pdf", Rejection::IgnoredExtension)]
    #[case("/IMAGE.PNG", Rejection::IgnoredExtension)]
    #[case("/files/archive.zip#top", Rejection::IgnoredExtension)]
    #[case("/search?q=rust", Rejection::IgnoredToken("?"))]
    #[case("/bin/view-cgi/page", Rejection::IgnoredToken("-cgi"))]
    #[case("http://[::1]:namedport", Rejection::Unresolvable)]
    fn test_admit_rejections(#[case] href: &str, #[case] expected: Rejection) {
        assert_eq!(filter("https://x.test/").admit(href), Err(expected));
    }

    #[test]
    fn test_ftp_on_same_host_rejected_by_scheme() {
        assert_eq!(
            filter("https://x.test/").admit("ftp://x.test/file"),
            Err(Rejection::Scheme("ftp".to_string()))
        );
    }

    #[test]
    fn test_relative_links_resolve_against_start_url() {
        // Resolved against /docs/, never against the page the link was on
        let filter = filter("https://x.test/docs");
        assert_eq!(
            filter.admit("tutorials/intro.html"),
            Ok("https://x.test/docs/tutorials/intro.html".to_string())
        );
    }

    #[test]
    fn test_out_of_scope_link_folded_by_filename() {
        let filter = filter("https://x.test/docs/");
        assert_eq!(
            filter.admit("https://x.test/docs/../other/page"),
            Ok("https://x.test/docs/page".to_string())
        );
    }

    #[rstest]
    #[case("https://x.test:443/docs/", "https://x.test/docs/sub/a.html")]
    #[case("https://X.test/docs/", "https://x.test/docs/sub/a.html")]
    #[case("https://x.test/my docs/", "https://x.test/my%20docs/sub/a.html")]
    fn test_non_canonical_start_url_keeps_subdirectories(
        #[case] start_url: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(filter(start_url).admit("sub/a.html"), Ok(expected.to_string()));
    }

    #[test]
    fn test_same_filename_in_different_directories_collides() {
        let filter = filter("https://x.test/docs/");
        let first = filter.admit("/a/index.html").unwrap();
        let second = filter.admit("/b/index.html").unwrap();
        assert_eq!(first, "https://x.test/docs/index.html");
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_scope_directory_link_folds_to_start_url() {
        let filter = filter("https://x.test/docs/");
        assert_eq!(filter.admit("/"), Ok("https://x.test/docs/".to_string()));
    }
}
