// src/links/html.rs
// =============================================================================
// This module extracts link targets from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Only anchor tags count. Links built by JavaScript are invisible to us.
// =============================================================================

use scraper::{Html, Selector};

// Extracts the raw href value of every <a href="..."> in the document
//
// Values are returned untouched and in document order. Resolving them to
// absolute URLs is the filter's job.
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='#top'>Top</a>"
//   result = ["/docs", "#top"]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    if html.is_empty() {
        return Vec::new();
    }

    let document = Html::parse_document(html);

    // Our selector "a[href]" is a constant and known to be valid
    let selector = Selector::parse("a[href]").expect("'a[href]' is a valid selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<html><body><p>No links here.</p></body></html>", vec![])]
    #[case(r#"<a href="https://www.rust-lang.org">Rust</a>"#, vec!["https://www.rust-lang.org"])]
    #[case(
        r##"
            <a href="/docs">Docs</a>
            <a href="../about">About</a>
            <a href="#section">Anchor</a>
            <a>No href</a>
            <link href="/style.css">
        "##,
        vec!["/docs", "../about", "#section"]
    )]
    #[case(r#"<a href="">Empty</a>"#, vec![""])]
    #[case("", vec![])]
    fn test_extract_hrefs(#[case] html: &str, #[case] expected: Vec<&str>) {
        assert_eq!(extract_hrefs(html), expected);
    }
}
