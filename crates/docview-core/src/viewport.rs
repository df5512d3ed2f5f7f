//! Viewport classification.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Layout family derived from the window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Narrow viewport: sliding sheet with drag-to-dismiss.
    Compact,
    /// Everything else.
    #[default]
    Wide,
}

impl Layout {
    /// Classify a window width against the compact breakpoint.
    pub fn classify(width: f64, compact_breakpoint: f64) -> Self {
        if width < compact_breakpoint {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    pub fn is_compact(self) -> bool {
        self == Self::Compact
    }

    /// Whether the modal may be dragged in this layout.
    pub fn allows_drag(self) -> bool {
        self.is_compact()
    }

    /// How the modal enters and leaves the screen.
    pub fn presentation(self, slide_duration: Duration) -> Presentation {
        match self {
            Self::Compact => Presentation::Slide {
                duration: slide_duration,
            },
            Self::Wide => Presentation::Instant,
        }
    }
}

/// Modal enter/exit transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Slides up from below the viewport and back down on exit.
    Slide { duration: Duration },
    /// Shows and hides without animation.
    Instant,
}

impl Presentation {
    /// Time the exit transition keeps the modal mounted.
    pub fn exit_delay(self) -> Duration {
        match self {
            Self::Slide { duration } => duration,
            Self::Instant => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_breakpoint() {
        assert_eq!(Layout::classify(767.9, 768.0), Layout::Compact);
        assert_eq!(Layout::classify(768.0, 768.0), Layout::Wide);
        assert_eq!(Layout::classify(1440.0, 768.0), Layout::Wide);
        assert_eq!(Layout::classify(375.0, 768.0), Layout::Compact);
    }

    #[test]
    fn test_only_compact_allows_drag() {
        assert!(Layout::Compact.allows_drag());
        assert!(!Layout::Wide.allows_drag());
    }

    #[test]
    fn test_presentation() {
        let slide = Duration::from_millis(500);
        assert_eq!(
            Layout::Compact.presentation(slide),
            Presentation::Slide { duration: slide }
        );
        assert_eq!(Layout::Wide.presentation(slide), Presentation::Instant);
        assert_eq!(Presentation::Instant.exit_delay(), Duration::ZERO);
        assert_eq!(Layout::Compact.presentation(slide).exit_delay(), slide);
    }
}
