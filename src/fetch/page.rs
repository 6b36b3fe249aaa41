// src/fetch/page.rs
// =============================================================================
// Loads the target page and hands back what the classifier needs:
// the final document URL, its origin, and every anchor href on it.
//
// Exactly one page is fetched. There is no retry: a failed load (bad URL,
// network or DNS error, timeout) ends the run with a FetchError. An HTTP
// error status is not a failed load; the returned page is parsed anyway.
// =============================================================================

use super::html::extract_hrefs;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Redirect hops followed before the load is treated as failed.
const MAX_REDIRECTS: usize = 10;

/// A loaded page, reduced to its links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Where the page ended up after redirects.
    pub url: Url,
    /// `scheme://host[:port]` of `url`, the same string a browser reports as
    /// `location.origin`.
    pub origin: String,
    /// Absolute anchor hrefs in document order, duplicates included.
    pub hrefs: Vec<String>,
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Fetches pages over HTTP(S) with reqwest and parses them with scraper.
///
/// Scripts are not executed, so links injected by JavaScript after load are
/// not seen.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!(url = %parsed, "loading page");
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|source| request_error(url, source))?;

        // An error page is still a page: its links are collected like any other
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "page answered with an error status");
        }

        let document_url = response.url().clone();
        let html = response.text().await.map_err(|source| {
            if source.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source,
                }
            }
        })?;

        let hrefs = extract_hrefs(&html, &document_url);
        tracing::debug!(url = %document_url, links = hrefs.len(), "page parsed");

        Ok(FetchedPage {
            origin: origin_of(&document_url),
            url: document_url,
            hrefs,
        })
    }
}

fn request_error(url: &str, source: reqwest::Error) -> FetchError {
    if source.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else {
        FetchError::Request {
            url: url.to_string(),
            source,
        }
    }
}

/// ASCII serialization of the URL's origin. Default ports are omitted.
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}
