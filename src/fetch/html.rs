// src/fetch/html.rs
// =============================================================================
// This module pulls anchor hrefs out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (the same parser family browsers use)
//
// We also use the `url` crate to resolve relative hrefs into absolute URLs,
// which is what a browser's `anchor.href` property returns.
//
// Rust concepts:
// - Result<T, E>: For hrefs that can't be resolved
// - Iterators: For processing collections
// - Closures: Anonymous functions (|x| ...)
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts every <a href> on the page as an absolute URL, in document order
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   document_url: the URL the page was loaded from (after redirects)
//
// Returns: Vec<String> with one entry per anchor, duplicates included
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='/docs'>Again</a>"
//   document_url = "https://example.com/"
//   result = ["https://example.com/docs", "https://example.com/docs"]
//
// Unlike a link checker we keep every scheme (mailto:, javascript:, ...).
// The classifier decides what matters.
pub fn extract_hrefs(html: &str, document_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    // Both selectors are constants and known to be valid
    let anchor_selector = Selector::parse("a[href]").expect("valid anchor selector");
    let base_selector = Selector::parse("base[href]").expect("valid base selector");

    // A <base href> changes what relative links resolve against
    let base = document
        .select(&base_selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .and_then(|href| document_url.join(href).ok())
        .unwrap_or_else(|| document_url.clone());

    let mut hrefs = Vec::new();
    for element in document.select(&anchor_selector) {
        if let Some(href) = element.value().attr("href") {
            hrefs.push(resolve_href(&base, href));
        }
    }

    hrefs
}

// Resolves a possibly-relative href to an absolute URL
//
// Examples:
//   base = "https://example.com/page/"
//   href = "/docs"            -> "https://example.com/docs"
//   href = "../other"         -> "https://example.com/other"
//   href = "https://a.com"    -> "https://a.com/"
//   href = "http://[::1"      -> "http://[::1" (malformed, kept as written)
//
// A malformed href comes back unchanged, the same value a browser's
// anchor.href returns when it can't parse the attribute.
fn resolve_href(base: &Url, href: &str) -> String {
    // join() handles absolute hrefs too, so one call covers both cases
    match base.join(href) {
        Ok(url) => url.into(),
        Err(e) => {
            tracing::debug!(href, base = %base, error = %e, "keeping unresolvable href as written");
            href.to_string()
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does Url::join work for absolute URLs?
//    - join() follows the same rules a browser uses for links
//    - If the href has its own scheme, the base is ignored
//    - Otherwise the href is resolved relative to the base
//
// 2. What is the <base> element?
//    - <base href="https://cdn.example.com/"> in the <head> changes the
//      starting point for every relative link on the page
//    - Only the first one counts, which is why we take .next()
//
// 3. Why keep hrefs that fail to parse?
//    - A browser's anchor.href hands back the raw attribute in that case
//    - Keeping it means a link like "https://example.com:99999/a.pdf"
//      is still classified by its prefix and extension
// -----------------------------------------------------------------------------
