// src/canonical.rs
// =============================================================================
// URL canonicalization.
//
// Every URL the crawler builds or compares goes through these helpers, so
// that two spellings of the same page end up as the same string:
// - duplicated slashes in the path are collapsed ("/docs//a" -> "/docs/a")
// - the "//" right after the scheme is kept ("https://")
// - fragments are dropped ("page#intro" -> "page")
//
// URL identity in this crawler is plain string equality after these rules.
// =============================================================================

use url::Url;

const SCHEME_SEPARATOR: &str = "://";

/// Collapses every run of `/` into a single `/`, except the separator that
/// follows the scheme.
///
/// Applying it twice gives the same result as applying it once.
pub fn collapse_slashes(url: &str) -> String {
    // Only the first "://" is the scheme separator. Anything after it is path
    // (or authority) text and gets collapsed.
    let (prefix, rest) = match url.find(SCHEME_SEPARATOR) {
        Some(idx) => url.split_at(idx + SCHEME_SEPARATOR.len()),
        None => ("", url),
    };

    let mut out = String::with_capacity(url.len());
    out.push_str(prefix);

    let mut previous_was_slash = false;
    for ch in rest.chars() {
        if ch == '/' {
            if previous_was_slash {
                continue;
            }
            previous_was_slash = true;
        } else {
            previous_was_slash = false;
        }
        out.push(ch);
    }

    out
}

/// Returns everything after the last `/`.
///
/// Empty when the URL ends with a slash.
pub fn basename(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}

/// Returns a copy of the URL without its `#fragment`.
pub fn strip_fragment(url: &Url) -> Url {
    let mut clean = url.clone();
    clean.set_fragment(None);
    clean
}

pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.com/docs//a", "https://example.com/docs/a")]
    #[case("https://example.com//docs///a////b", "https://example.com/docs/a/b")]
    #[case("http://127.0.0.1:8080//x", "http://127.0.0.1:8080/x")]
    #[case("https://example.com/", "https://example.com/")]
    #[case("no/scheme//here", "no/scheme/here")]
    #[case("", "")]
    fn test_collapse_slashes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(collapse_slashes(input), expected);
    }

    #[rstest]
    #[case("https://example.com/docs//a")]
    #[case("https://example.com/////")]
    #[case("https:///x")]
    #[case("//just//slashes//")]
    #[case("ftp://a//b://c//d")]
    fn test_collapse_slashes_is_idempotent(#[case] input: &str) {
        let once = collapse_slashes(input);
        let twice = collapse_slashes(&once);
        assert_eq!(once, twice);
    }

    #[rstest]
    #[case("https://example.com/docs/page.html", "page.html")]
    #[case("https://example.com/docs/", "")]
    #[case("page", "page")]
    fn test_basename(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(basename(input), expected);
    }

    #[test]
    fn test_strip_fragment() {
        let url = Url::parse("https://example.com/a#section").unwrap();
        assert_eq!(strip_fragment(&url).as_str(), "https://example.com/a");
    }

    #[test]
    fn test_ensure_trailing_slash() {
        assert_eq!(ensure_trailing_slash("https://x.test/docs"), "https://x.test/docs/");
        assert_eq!(ensure_trailing_slash("https://x.test/docs/"), "https://x.test/docs/");
    }
}
