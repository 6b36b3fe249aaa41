// src/links/extract.rs
// =============================================================================
// Splits the raw hrefs of a page into two candidate lists:
// - sub-URLs: links that start with the page's origin (same site)
// - files: links ending in an allowed file extension
//
// The two tests are independent. A same-site PDF link lands in both lists,
// and an off-site PDF link lands only in the file list.
// =============================================================================

use crate::config::ExtensionSet;

/// Candidate lists, in the order the hrefs appeared on the page.
/// Duplicates are still present here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    pub sub_urls: Vec<String>,
    pub files: Vec<String>,
}

/// Classifies `hrefs` against `origin` and the extension allowlist.
///
/// The origin test is a plain string prefix check, so `https://example.com`
/// also accepts `https://example.com.evil.org/`. That mirrors how the
/// browser-side filter behaves and is left as is.
pub fn extract<S: AsRef<str>>(hrefs: &[S], origin: &str, extensions: &ExtensionSet) -> Candidates {
    let sub_urls = hrefs
        .iter()
        .map(AsRef::as_ref)
        .filter(|href| href.starts_with(origin))
        .map(str::to_string)
        .collect();

    let files = hrefs
        .iter()
        .map(AsRef::as_ref)
        .filter(|href| extensions.matches(href))
        .map(str::to_string)
        .collect();

    Candidates { sub_urls, files }
}
