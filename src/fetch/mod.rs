// src/fetch/mod.rs
// =============================================================================
// Loading the target page.
//
// Submodules:
// - page: the PageFetcher trait and its reqwest-based implementation
// - html: turns page HTML into a list of absolute anchor hrefs
// =============================================================================

mod html;
mod page;

pub use page::{FetchedPage, HttpFetcher, PageFetcher};
