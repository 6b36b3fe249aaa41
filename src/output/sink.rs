// src/output/sink.rs
// =============================================================================
// Where the finished document goes.
//
// The Sink trait is the seam between the pipeline and storage. FileSink is
// the real implementation; tests swap in an in-memory one.
// =============================================================================

use crate::error::SinkError;
use async_trait::async_trait;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Writing to this path sends the document to stdout instead of a file.
pub const STDOUT_PATH: &str = "-";

#[async_trait]
pub trait Sink: Send + Sync {
    /// Stores `document` under `path`. The sink never retries.
    async fn write(&self, path: &Path, document: &str) -> Result<(), SinkError>;
}

/// Writes UTF-8 text files, creating parent directories as needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

#[async_trait]
impl Sink for FileSink {
    async fn write(&self, path: &Path, document: &str) -> Result<(), SinkError> {
        let wrap = |source: std::io::Error| SinkError::Write {
            path: path.to_path_buf(),
            source,
        };

        if path.as_os_str() == STDOUT_PATH {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(document.as_bytes()).await.map_err(wrap)?;
            stdout.write_all(b"\n").await.map_err(wrap)?;
            stdout.flush().await.map_err(wrap)?;
            return Ok(());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(wrap)?;
        }

        tokio::fs::write(path, document).await.map_err(wrap)?;
        tracing::info!(path = %path.display(), bytes = document.len(), "document saved");
        Ok(())
    }
}
