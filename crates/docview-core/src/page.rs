//! Page navigation display values and per-page layout.
//!
//! Page bounds belong to the renderer; nothing here clamps or validates
//! page numbers.

use std::fmt;

use crate::config::PageConfig;

/// Page position as reported by the renderer.
///
/// Both fields are `None` until the document has loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCounter {
    /// Zero-based index of the visible page.
    pub current: Option<usize>,

    /// Number of pages in the document.
    pub total: Option<usize>,
}

impl PageCounter {
    /// Create a counter from renderer values.
    pub fn new(current: Option<usize>, total: Option<usize>) -> Self {
        Self { current, total }
    }

    /// One-based label of the visible page, empty before load.
    pub fn current_label(&self) -> String {
        self.current
            .map(|index| (index + 1).to_string())
            .unwrap_or_default()
    }

    /// Page count label, `0` before load.
    pub fn total_label(&self) -> String {
        self.total.unwrap_or(0).to_string()
    }
}

impl fmt::Display for PageCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current_label(), self.total_label())
    }
}

/// Per-page layout applied at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Vertical gap below each page.
    pub spacing: u32,
}

impl PageLayout {
    pub fn new(spacing: u32) -> Self {
        Self { spacing }
    }

    /// CSS value for the bottom margin of each page.
    pub fn margin_bottom(&self) -> String {
        format!("{}px", self.spacing)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        PageConfig::default().into()
    }
}

impl From<PageConfig> for PageLayout {
    fn from(config: PageConfig) -> Self {
        Self::new(config.spacing)
    }
}
