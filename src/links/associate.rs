// src/links/associate.rs
// =============================================================================
// Associates each file with the sub-URLs it sits "beneath".
//
// The rule is a literal string prefix test: a file belongs to a sub-URL when
// the file's URL starts with the sub-URL's URL. It is not aware of path
// segments, so "https://example.com/doc" also claims
// "https://example.com/documents/x.pdf".
//
// A file can belong to several sub-URLs, or to none. Files with no match are
// left out of the association and reported separately so the caller can log
// them.
// =============================================================================

/// One sub-URL and the filenames found beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubUrlEntry {
    pub url: String,
    /// Last path segment of every matched file, in file discovery order.
    pub files: Vec<String>,
}

/// Sub-URL to filename mapping, in sub-URL discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Association {
    pub entries: Vec<SubUrlEntry>,
    /// Full URLs of files that matched no sub-URL.
    pub unassociated: Vec<String>,
}

impl Association {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of (sub-URL, file) pairs.
    pub fn link_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.files.len()).sum()
    }
}

/// Builds the association. Both inputs are expected to be deduplicated.
///
/// Runs in O(sub_urls × files), which is fine for the links of one page.
pub fn associate(sub_urls: &[String], files: &[String]) -> Association {
    let mut matched = vec![false; files.len()];

    let entries = sub_urls
        .iter()
        .map(|sub_url| {
            let files = files
                .iter()
                .enumerate()
                .filter(|(_, file)| file.starts_with(sub_url.as_str()))
                .map(|(index, file)| {
                    matched[index] = true;
                    file_name(file).to_string()
                })
                .collect();

            SubUrlEntry {
                url: sub_url.clone(),
                files,
            }
        })
        .collect();

    let unassociated = files
        .iter()
        .zip(matched)
        .filter(|(_, was_matched)| !was_matched)
        .map(|(file, _)| file.clone())
        .collect();

    Association { entries, unassociated }
}

/// Everything after the last '/', or the whole string if there is none.
///
/// Query strings and fragments are not stripped, and a URL ending in '/'
/// yields an empty name.
pub fn file_name(url: &str) -> &str {
    match url.rfind('/') {
        Some(index) => &url[index + 1..],
        None => url,
    }
}
