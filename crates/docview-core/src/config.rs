//! Viewer configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    zoom::{ZoomLevel, ZoomSeed},
};

/// Tunables for the preview modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Viewport classification settings.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Drag-to-dismiss settings.
    #[serde(default)]
    pub gesture: GestureConfig,

    /// Zoom seeding settings.
    #[serde(default)]
    pub zoom: ZoomConfig,

    /// Page layout handed to the renderer.
    #[serde(default)]
    pub page: PageConfig,
}

/// Viewport classification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Widths strictly below this are compact.
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: f64,

    /// Duration of the compact slide transition, in milliseconds.
    #[serde(default = "default_slide_duration_ms")]
    pub slide_duration_ms: u64,
}

/// Drag-to-dismiss configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Release offset that must be exceeded to dismiss.
    #[serde(default = "default_dismiss_threshold")]
    pub dismiss_threshold: f64,

    /// Furthest the modal follows the pointer while dragging.
    #[serde(default = "default_max_drag_offset")]
    pub max_drag_offset: f64,
}

/// Zoom seeding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Seeds in descending `min_width` order.
    #[serde(default = "default_zoom_seeds")]
    pub seeds: Vec<ZoomSeed>,

    /// Table index used below the smallest seed width.
    #[serde(default = "default_fallback_zoom")]
    pub fallback: usize,
}

/// Per-page layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Vertical gap added below each rendered page.
    #[serde(default = "default_page_spacing")]
    pub spacing: u32,
}

fn default_compact_breakpoint() -> f64 {
    768.0
}

fn default_slide_duration_ms() -> u64 {
    500
}

fn default_dismiss_threshold() -> f64 {
    100.0
}

fn default_max_drag_offset() -> f64 {
    100.0
}

fn default_zoom_seeds() -> Vec<ZoomSeed> {
    vec![
        ZoomSeed::new(1920, 5),
        ZoomSeed::new(1024, 4),
        ZoomSeed::new(768, 3),
    ]
}

fn default_fallback_zoom() -> usize {
    1
}

fn default_page_spacing() -> u32 {
    20
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: default_compact_breakpoint(),
            slide_duration_ms: default_slide_duration_ms(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            dismiss_threshold: default_dismiss_threshold(),
            max_drag_offset: default_max_drag_offset(),
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            seeds: default_zoom_seeds(),
            fallback: default_fallback_zoom(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            spacing: default_page_spacing(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ViewerConfig = toml::from_str(content)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.layout.compact_breakpoint.is_nan() || self.layout.compact_breakpoint < 0.0 {
            return Err(CoreError::config(
                "layout.compact_breakpoint must be a non-negative number",
            ));
        }

        if self.gesture.dismiss_threshold.is_nan() || self.gesture.dismiss_threshold < 0.0 {
            return Err(CoreError::config(
                "gesture.dismiss_threshold must be a non-negative number",
            ));
        }

        if self.gesture.max_drag_offset.is_nan() || self.gesture.max_drag_offset < 0.0 {
            return Err(CoreError::config(
                "gesture.max_drag_offset must be a non-negative number",
            ));
        }

        for seed in &self.zoom.seeds {
            if ZoomLevel::from_index(seed.index).is_none() {
                return Err(CoreError::config(format!(
                    "zoom seed index {} is outside the zoom table",
                    seed.index
                )));
            }
        }

        if ZoomLevel::from_index(self.zoom.fallback).is_none() {
            return Err(CoreError::config(format!(
                "zoom.fallback index {} is outside the zoom table",
                self.zoom.fallback
            )));
        }

        if self
            .zoom
            .seeds
            .windows(2)
            .any(|w| w[0].min_width <= w[1].min_width)
        {
            return Err(CoreError::config(
                "zoom.seeds must be ordered by strictly descending min_width",
            ));
        }

        if self.gesture.dismiss_threshold > self.gesture.max_drag_offset {
            log::warn!(
                "gesture.dismiss_threshold ({}) exceeds max_drag_offset ({}); the sheet stops before the dismiss point",
                self.gesture.dismiss_threshold,
                self.gesture.max_drag_offset
            );
        }

        Ok(())
    }

    /// Slide transition duration for the compact layout.
    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(self.layout.slide_duration_ms)
    }

    /// Zoom seed for a measured viewport width.
    pub fn seed_zoom(&self, width: f64) -> ZoomLevel {
        ZoomLevel::seed(width, &self.zoom.seeds, self.zoom.fallback)
    }
}
