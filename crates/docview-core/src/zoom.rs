//! Zoom-level controller.
//!
//! A [`ZoomLevel`] is an index into [`ZOOM_TABLE`] and can only be built from
//! a valid index, so every level resolves to a table entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported zoom percentages, ascending.
pub const ZOOM_TABLE: [u16; 19] = [
    10, 20, 25, 33, 50, 67, 75, 80, 90, 100, 110, 125, 150, 175, 200, 250, 300, 400, 500,
];

/// Maps a minimum viewport width to the zoom table index used when the
/// viewer is measured at or above that width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomSeed {
    /// Smallest viewport width (inclusive) this seed applies to.
    pub min_width: u32,

    /// Position in [`ZOOM_TABLE`].
    pub index: usize,
}

impl ZoomSeed {
    /// Create a new zoom seed.
    pub const fn new(min_width: u32, index: usize) -> Self {
        Self { min_width, index }
    }
}

/// A position in [`ZOOM_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoomLevel {
    index: usize,
}

impl ZoomLevel {
    /// Smallest zoom (10%).
    pub const MIN: Self = Self { index: 0 };

    /// Largest zoom (500%).
    pub const MAX: Self = Self {
        index: ZOOM_TABLE.len() - 1,
    };

    /// Level at `index`, or `None` if it is out of the table.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ZOOM_TABLE.len()).then_some(Self { index })
    }

    /// Seed level for a measured viewport width.
    ///
    /// `seeds` are checked in order and the first whose `min_width` the
    /// width reaches wins; otherwise `fallback` is used. Indices past the
    /// end of the table saturate at [`ZoomLevel::MAX`].
    pub fn seed(width: f64, seeds: &[ZoomSeed], fallback: usize) -> Self {
        let index = seeds
            .iter()
            .find(|seed| width >= f64::from(seed.min_width))
            .map_or(fallback, |seed| seed.index);
        Self {
            index: index.min(Self::MAX.index),
        }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn percent(self) -> u16 {
        ZOOM_TABLE[self.index]
    }

    /// Scale factor handed to the renderer (`percent / 100`).
    pub fn scale(self) -> f64 {
        f64::from(self.percent()) / 100.0
    }

    pub fn can_zoom_in(self) -> bool {
        self < Self::MAX
    }

    pub fn can_zoom_out(self) -> bool {
        self > Self::MIN
    }

    /// Next level up, saturating at [`ZoomLevel::MAX`].
    pub fn zoomed_in(self) -> Self {
        Self {
            index: (self.index + 1).min(Self::MAX.index),
        }
    }

    /// Next level down, saturating at [`ZoomLevel::MIN`].
    pub fn zoomed_out(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
        }
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;

    fn seed(width: f64) -> ZoomLevel {
        ViewerConfig::default().seed_zoom(width)
    }

    #[test]
    fn test_table_is_ascending() {
        assert!(ZOOM_TABLE.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_seed_breakpoints() {
        assert_eq!(seed(2560.0).index(), 5);
        assert_eq!(seed(1920.0).index(), 5);
        assert_eq!(seed(1919.0).index(), 4);
        assert_eq!(seed(1024.0).index(), 4);
        assert_eq!(seed(1023.5).index(), 3);
        assert_eq!(seed(768.0).index(), 3);
        assert_eq!(seed(767.0).index(), 1);
        assert_eq!(seed(320.0).index(), 1);
        assert_eq!(seed(0.0).index(), 1);
    }

    #[test]
    fn test_seed_labels_follow_table() {
        assert_eq!(seed(1920.0).to_string(), "67%");
        assert_eq!(seed(1300.0).to_string(), "50%");
        assert_eq!(seed(800.0).to_string(), "33%");
        assert_eq!(seed(400.0).to_string(), "20%");
    }

    #[test]
    fn test_seed_saturates_past_table() {
        let seeds = [ZoomSeed::new(0, 99)];
        assert_eq!(ZoomLevel::seed(10.0, &seeds, 1), ZoomLevel::MAX);
        assert_eq!(ZoomLevel::seed(10.0, &[], 42), ZoomLevel::MAX);
    }

    #[test]
    fn test_zoom_in_out_round_trip() {
        for index in 1..ZOOM_TABLE.len() - 1 {
            let level = ZoomLevel::from_index(index).unwrap();
            assert_eq!(level.zoomed_in().zoomed_out(), level);
            assert_eq!(level.zoomed_out().zoomed_in(), level);
        }
    }

    #[test]
    fn test_bounds_are_no_ops() {
        assert_eq!(ZoomLevel::MAX.zoomed_in(), ZoomLevel::MAX);
        assert_eq!(ZoomLevel::MIN.zoomed_out(), ZoomLevel::MIN);
        assert_eq!(ZoomLevel::MAX.percent(), 500);
        assert_eq!(ZoomLevel::MIN.percent(), 10);
        assert!(!ZoomLevel::MAX.can_zoom_in());
        assert!(!ZoomLevel::MIN.can_zoom_out());
        assert!(ZoomLevel::MIN.can_zoom_in());
    }

    #[test]
    fn test_from_index_rejects_out_of_range() {
        assert!(ZoomLevel::from_index(ZOOM_TABLE.len()).is_none());
        assert_eq!(ZoomLevel::from_index(9).map(ZoomLevel::percent), Some(100));
    }

    #[test]
    fn test_scale_and_label() {
        let level = ZoomLevel::from_index(11).unwrap();
        assert!((level.scale() - 1.25).abs() < f64::EPSILON);
        assert_eq!(level.to_string(), "125%");
    }
}
