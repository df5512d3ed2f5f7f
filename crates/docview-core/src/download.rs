//! Download request derivation.

/// A browser download to synthesize for the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// URL the browser fetches.
    pub href: String,

    /// Suggested filename; `None` leaves the choice to the browser.
    pub filename: Option<String>,
}

impl DownloadRequest {
    /// Build the request for a document URL.
    pub fn for_document(url: &str) -> Self {
        Self {
            href: url.to_string(),
            filename: suggested_filename(url),
        }
    }
}

/// Final path segment of `url`, ignoring any query string or fragment.
///
/// Returns `None` when the path ends in a separator.
pub fn suggested_filename(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    (!segment.is_empty()).then(|| segment.to_string())
}
