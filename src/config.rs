// src/config.rs
// =============================================================================
// Runtime configuration.
//
// Sources, lowest priority first:
// 1. Built-in defaults (the seven downloadable-file extensions, 30s timeout)
// 2. An optional TOML file passed with --config
// 3. Command-line flags (--ext, --timeout, --user-agent)
//
// Example file:
//
//   extensions = [".pdf", ".csv"]
//   timeout_secs = 15
//   user_agent = "my-bot/1.0"
// =============================================================================

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Extensions a link must end with to count as a downloadable file.
pub const DEFAULT_EXTENSIONS: [&str; 7] = [".pdf", ".jpg", ".jpeg", ".png", ".docx", ".xlsx", ".zip"];

/// Matches the navigation timeout a headless browser would use.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_USER_AGENT: &str = concat!("link-harvest/", env!("CARGO_PKG_VERSION"));

/// The file-extension allowlist.
///
/// Entries are stored lowercase with a leading dot, so `"PDF"`, `"pdf"` and
/// `".pdf"` all describe the same extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: Vec<String>,
}

impl ExtensionSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref().trim().to_lowercase();
            if ext.is_empty() || ext == "." {
                continue;
            }
            let ext = if ext.starts_with('.') { ext } else { format!(".{}", ext) };
            if !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        Self { extensions: normalized }
    }

    /// True when `href`, lowercased, ends with one of the extensions.
    pub fn matches(&self, href: &str) -> bool {
        let lower = href.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

/// Settings as they appear in the TOML file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub extensions: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        extensions: Vec<String>,
        timeout_secs: Option<u64>,
        user_agent: Option<String>,
    ) -> Self {
        if !extensions.is_empty() {
            self.extensions = Some(extensions);
        }
        if timeout_secs.is_some() {
            self.timeout_secs = timeout_secs;
        }
        if user_agent.is_some() {
            self.user_agent = user_agent;
        }
        self
    }

    pub fn extension_set(&self) -> ExtensionSet {
        match &self.extensions {
            Some(list) => ExtensionSet::new(list),
            None => ExtensionSet::default(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
