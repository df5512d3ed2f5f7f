//! Caller-supplied preview card inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reading time shown under the card, numeric or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingTime {
    Minutes(u32),
    Text(String),
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(minutes) => write!(f, "{minutes}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for ReadingTime {
    fn from(minutes: u32) -> Self {
        Self::Minutes(minutes)
    }
}

impl From<&str> for ReadingTime {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ReadingTime {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Everything the card and viewer need from the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewInput {
    /// Document to render and download.
    pub document_url: String,

    /// Static preview image for the card.
    pub preview_image_url: String,

    /// Card title.
    pub title: String,

    /// Reading time, rendered verbatim.
    pub reading_time: ReadingTime,
}

impl PreviewInput {
    /// Create a new preview input.
    pub fn new(
        document_url: impl Into<String>,
        preview_image_url: impl Into<String>,
        title: impl Into<String>,
        reading_time: impl Into<ReadingTime>,
    ) -> Self {
        Self {
            document_url: document_url.into(),
            preview_image_url: preview_image_url.into(),
            title: title.into(),
            reading_time: reading_time.into(),
        }
    }

    /// Caption line under the card title.
    pub fn reading_time_label(&self) -> String {
        format!("Reading time: {} min", self.reading_time)
    }
}
