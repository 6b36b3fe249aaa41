// src/pipeline.rs
// =============================================================================
// One run, start to finish:
//
//   fetch page -> extract -> dedupe -> associate -> serialize -> sink
//
// Only the first and last steps touch the outside world. If the fetch fails
// nothing else happens: no document is built and the sink is never called.
// =============================================================================

use crate::config::ExtensionSet;
use crate::error::{FetchError, PipelineError};
use crate::fetch::{FetchedPage, PageFetcher};
use crate::links::{self, Association};
use crate::output::{self, Sink};
use serde::Serialize;
use std::path::Path;

/// Everything learned from one page. Built fresh for every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlResult {
    /// The URL exactly as the user gave it.
    pub target_url: String,
    pub origin: String,
    /// Anchor hrefs seen on the page, before any filtering.
    pub href_count: usize,
    pub sub_urls: Vec<String>,
    pub files: Vec<String>,
    pub association: Association,
}

impl CrawlResult {
    /// Classifies the links of an already loaded page.
    pub fn from_page(target_url: &str, page: FetchedPage, extensions: &ExtensionSet) -> Self {
        let candidates = links::extract(&page.hrefs, &page.origin, extensions);
        let sub_urls = links::dedupe(candidates.sub_urls);
        let files = links::dedupe(candidates.files);
        let association = links::associate(&sub_urls, &files);

        Self {
            target_url: target_url.to_string(),
            origin: page.origin,
            href_count: page.hrefs.len(),
            sub_urls,
            files,
            association,
        }
    }

    pub fn to_xml(&self) -> String {
        output::serialize(&self.target_url, &self.association)
    }
}

/// Summary of a successful run, printed as JSON with --json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub target_url: String,
    pub origin: String,
    pub links_found: usize,
    pub sub_urls: usize,
    pub files: usize,
    /// (sub-URL, file) pairs written to the document.
    pub file_entries: usize,
    /// Files that matched no sub-URL and were left out.
    pub unassociated_files: Vec<String>,
    pub output: String,
}

pub struct Pipeline<F, S> {
    fetcher: F,
    sink: S,
    extensions: ExtensionSet,
}

impl<F: PageFetcher, S: Sink> Pipeline<F, S> {
    pub fn new(fetcher: F, sink: S, extensions: ExtensionSet) -> Self {
        Self {
            fetcher,
            sink,
            extensions,
        }
    }

    /// Fetches the page and builds the association, without writing anything.
    pub async fn scrape(&self, target_url: &str) -> Result<CrawlResult, FetchError> {
        tracing::info!(url = target_url, "scraping");
        let page = self.fetcher.fetch(target_url).await?;
        tracing::debug!(document = %page.url, origin = %page.origin, "page loaded");

        let result = CrawlResult::from_page(target_url, page, &self.extensions);

        for file in &result.association.unassociated {
            tracing::debug!(file = %file, "file matches no sub-URL, leaving it out");
        }
        tracing::info!(
            links = result.href_count,
            sub_urls = result.sub_urls.len(),
            files = result.files.len(),
            dropped = result.association.unassociated.len(),
            "links classified"
        );

        Ok(result)
    }

    /// Scrapes `target_url` and stores the XML document at `output`.
    pub async fn run(&self, target_url: &str, output: &Path) -> Result<RunReport, PipelineError> {
        let result = self.scrape(target_url).await?;
        let document = result.to_xml();

        if let Err(source) = self.sink.write(output, &document).await {
            return Err(PipelineError::Sink { source, document });
        }

        Ok(RunReport {
            links_found: result.href_count,
            sub_urls: result.sub_urls.len(),
            files: result.files.len(),
            file_entries: result.association.link_count(),
            unassociated_files: result.association.unassociated,
            target_url: result.target_url,
            origin: result.origin,
            output: output.display().to_string(),
        })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is Pipeline generic over F and S?
//    - The real program uses HttpFetcher and FileSink
//    - Tests plug in fakes that return canned links or record writes
//    - No network or disk is needed to test the logic in between
//
// 2. What does #[async_trait] do?
//    - It lets traits like PageFetcher and Sink declare async methods
//    - The macro rewrites them to return boxed futures that are Send
//
// 3. Why return the document inside PipelineError::Sink?
//    - The XML was already built when the write failed
//    - Handing it back means a caller can try another path without
//      fetching the page again
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;
    use crate::fetch::HttpFetcher;
    use crate::output::FileSink;
    use async_trait::async_trait;
    use httpmock::{Method::GET, MockServer};
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::time::Duration;
    use url::Url;

    /// Serves a fixed list of hrefs, or fails when `hrefs` is None.
    struct StaticFetcher {
        origin: &'static str,
        hrefs: Option<Vec<&'static str>>,
    }

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
            match &self.hrefs {
                Some(hrefs) => Ok(FetchedPage {
                    url: Url::parse(url).unwrap(),
                    origin: self.origin.to_string(),
                    hrefs: hrefs.iter().map(|h| h.to_string()).collect(),
                }),
                None => Err(FetchError::Timeout(url.to_string())),
            }
        }
    }

    #[derive(Default)]
    struct MemorySink {
        writes: Mutex<Vec<(PathBuf, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl Sink for MemorySink {
        async fn write(&self, path: &Path, document: &str) -> Result<(), SinkError> {
            if self.fail {
                return Err(SinkError::Write {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                });
            }
            self.writes
                .lock()
                .unwrap()
                .push((path.to_path_buf(), document.to_string()));
            Ok(())
        }
    }

    fn pipeline(hrefs: Option<Vec<&'static str>>) -> Pipeline<StaticFetcher, MemorySink> {
        Pipeline::new(
            StaticFetcher {
                origin: "https://example.com",
                hrefs,
            },
            MemorySink::default(),
            ExtensionSet::default(),
        )
    }

    #[tokio::test]
    async fn test_scrape_basic_association() {
        let pipeline = pipeline(Some(vec![
            "https://example.com/docs",
            "https://example.com/docs/a.pdf",
            "https://other.com/x",
        ]));

        let result = pipeline.scrape("https://example.com").await.unwrap();

        assert_eq!(result.href_count, 3);
        assert_eq!(
            result.sub_urls,
            vec!["https://example.com/docs", "https://example.com/docs/a.pdf"]
        );
        assert_eq!(result.files, vec!["https://example.com/docs/a.pdf"]);
        assert_eq!(result.association.entries[0].url, "https://example.com/docs");
        assert_eq!(result.association.entries[0].files, vec!["a.pdf"]);
        // The PDF is also a same-origin link, and prefixes itself.
        assert_eq!(result.association.entries[1].files, vec!["a.pdf"]);
    }

    #[tokio::test]
    async fn test_unmatched_file_is_absent_from_output() {
        let pipeline = pipeline(Some(vec![
            "https://example.com/docs",
            "https://cdn.example.net/other/b.jpg",
        ]));

        let result = pipeline.scrape("https://example.com").await.unwrap();
        let xml = result.to_xml();

        assert!(result.association.entries[0].files.is_empty());
        assert_eq!(result.association.unassociated, vec!["https://cdn.example.net/other/b.jpg"]);
        assert!(!xml.contains("b.jpg"));
    }

    #[tokio::test]
    async fn test_empty_page_still_writes_a_document() {
        let pipeline = pipeline(Some(Vec::new()));

        let report = pipeline.run("https://example.com", Path::new("out.xml")).await.unwrap();

        let writes = pipeline.sink.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert!(writes[0].1.contains(r#"<url name="https://example.com"/>"#));
        assert!(!writes[0].1.contains("subUrl"));
        assert_eq!(report.sub_urls, 0);
        assert_eq!(report.output, "out.xml");
    }

    #[tokio::test]
    async fn test_duplicate_hrefs_count_once() {
        let pipeline = pipeline(Some(vec![
            "https://example.com/docs",
            "https://example.com/docs",
            "https://example.com/docs/a.pdf",
            "https://example.com/docs/a.pdf",
        ]));

        let result = pipeline.scrape("https://example.com").await.unwrap();

        assert_eq!(result.href_count, 4);
        assert_eq!(result.sub_urls.len(), 2);
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.association.entries[0].files, vec!["a.pdf"]);
        assert_eq!(result.to_xml().matches(r#"<file name="a.pdf"/>"#).count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_never_reaches_sink() {
        let pipeline = pipeline(None);

        let err = pipeline
            .run("https://unreachable.invalid", Path::new("out.xml"))
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Fetch(FetchError::Timeout(_))));
        assert!(pipeline.sink.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sink_failure_keeps_document() {
        let pipeline = Pipeline::new(
            StaticFetcher {
                origin: "https://example.com",
                hrefs: Some(vec!["https://example.com/docs"]),
            },
            MemorySink {
                fail: true,
                ..Default::default()
            },
            ExtensionSet::default(),
        );

        let err = pipeline.run("https://example.com", Path::new("out.xml")).await.unwrap_err();

        match err {
            PipelineError::Sink { document, .. } => {
                assert!(document.contains(r#"<subUrl name="https://example.com/docs"/>"#))
            }
            other => panic!("expected sink error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_status_page_still_produces_a_document() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/gone");
                then.status(404)
                    .body(r#"<a href="/docs">Docs</a><a href="/docs/a.pdf">A</a>"#);
            })
            .await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("data.xml");
        let fetcher = HttpFetcher::new(Duration::from_secs(5), "link-harvest-test").unwrap();
        let pipeline = Pipeline::new(fetcher, FileSink, ExtensionSet::default());

        let report = pipeline.run(&server.url("/gone"), &output).await.unwrap();

        let xml = std::fs::read_to_string(&output).unwrap();
        assert!(xml.contains(&format!(r#"<subUrl name="{}">"#, server.url("/docs"))));
        assert!(xml.contains(r#"<file name="a.pdf"/>"#));
        assert_eq!(report.sub_urls, 2);
    }

    #[tokio::test]
    async fn test_end_to_end_over_http() {
        let server = MockServer::start_async().await;
        let page = r#"<html><body>
                <a href="/reports">Reports</a>
                <a href="/reports/2024.PDF">2024</a>
                <a href="/reports/2024.PDF">2024 again</a>
                <a href="/img/logo.png">Logo</a>
                <a href="https://elsewhere.org/x.zip">Mirror</a>
                <a href="mailto:team@example.com">Mail</a>
            </body></html>"#;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).header("content-type", "text/html").body(page);
            })
            .await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("data.xml");
        let fetcher = HttpFetcher::new(Duration::from_secs(5), "link-harvest-test").unwrap();
        let pipeline = Pipeline::new(fetcher, FileSink, ExtensionSet::default());

        let target = server.url("/");
        let report = pipeline.run(&target, &output).await.unwrap();

        let xml = std::fs::read_to_string(&output).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<url name="{}">"#, target)));
        assert!(xml.contains(&format!(r#"<subUrl name="{}">"#, server.url("/reports"))));
        assert!(xml.contains(r#"<file name="2024.PDF"/>"#));
        assert!(!xml.contains("x.zip"));

        assert_eq!(report.links_found, 6);
        assert_eq!(report.sub_urls, 3);
        assert_eq!(report.files, 3);
        assert_eq!(report.unassociated_files, vec!["https://elsewhere.org/x.zip"]);
    }
}
