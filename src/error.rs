// src/error.rs
// =============================================================================
// Error types for the two things that can actually fail in a run:
// loading the target page and saving the finished document.
//
// Everything in between (extracting, deduplicating, associating, writing XML)
// works on in-memory strings and has no failure mode of its own.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// The page could not be loaded, so no document can be produced.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("timed out loading {0}")]
    Timeout(String),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read the body of {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// The document was built but could not be stored.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Anything that aborts a full run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not save the document")]
    Sink {
        #[source]
        source: SinkError,
        /// The serialized document, kept so the caller can retry the write.
        document: String,
    },
}
