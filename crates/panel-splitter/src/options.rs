//! Splitting configuration.
//!
//! Page-level detection and per-segment cropping use separate threshold
//! pairs; both are tunable independently of each other.

use crate::{Result, SplitError};

/// Intensity cutoffs separating blank and dark pixels from content.
///
/// A pixel is blank if its intensity is strictly above `light`, dark if
/// strictly below `dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub light: u8,
    pub dark: u8,
}

impl Thresholds {
    pub const fn new(light: u8, dark: u8) -> Self {
        Self { light, dark }
    }

    /// Defaults used when scanning a whole page for split rows.
    pub const PAGE: Self = Self::new(240, 15);

    /// Defaults used when trimming margins off a page or segment.
    pub const SEGMENT: Self = Self::new(240, 30);

    /// True if the intensity is neither blank nor dark.
    #[inline]
    pub fn is_content(&self, intensity: u8) -> bool {
        intensity <= self.light && intensity >= self.dark
    }

    /// Check that `dark < light`.
    pub fn validate(&self) -> Result<()> {
        if self.dark >= self.light {
            return Err(SplitError::InvalidThresholds {
                light: self.light,
                dark: self.dark,
            });
        }
        Ok(())
    }
}

/// Target output frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SplitError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(1072, 1448)
    }
}

/// Configuration for [`PageSplitter`](crate::PageSplitter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitOptions {
    /// Thresholds for dead-row detection and whole-page cropping.
    pub page_thresholds: Thresholds,

    /// Thresholds for trimming each split segment.
    pub segment_thresholds: Thresholds,

    /// Split points closer together than this (in rows) do not produce a segment.
    pub min_gap: u32,

    /// Segments shorter than this are dropped.
    pub min_segment_height: u32,

    /// Output frame every page or segment is fitted onto.
    pub canvas: CanvasSize,

    /// Pages wider than this width/height ratio (and colored) are split as strips.
    pub strip_aspect_ratio: f64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            page_thresholds: Thresholds::PAGE,
            segment_thresholds: Thresholds::SEGMENT,
            min_gap: 20,
            min_segment_height: 75,
            canvas: CanvasSize::default(),
            strip_aspect_ratio: 1.5,
        }
    }
}

impl SplitOptions {
    /// Create options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set page-level thresholds.
    pub fn with_page_thresholds(mut self, val: Thresholds) -> Self {
        self.page_thresholds = val;
        self
    }

    /// Builder: set segment-level thresholds.
    pub fn with_segment_thresholds(mut self, val: Thresholds) -> Self {
        self.segment_thresholds = val;
        self
    }

    /// Builder: set the minimum distance between split points.
    pub fn with_min_gap(mut self, val: u32) -> Self {
        self.min_gap = val;
        self
    }

    /// Builder: set the minimum kept segment height.
    pub fn with_min_segment_height(mut self, val: u32) -> Self {
        self.min_segment_height = val;
        self
    }

    /// Builder: set the output canvas.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas = CanvasSize::new(width, height);
        self
    }

    /// Builder: set the strip-style aspect ratio cutoff.
    pub fn with_strip_aspect_ratio(mut self, val: f64) -> Self {
        self.strip_aspect_ratio = val;
        self
    }

    /// Check every threshold pair and the canvas.
    pub fn validate(&self) -> Result<()> {
        self.page_thresholds.validate()?;
        self.segment_thresholds.validate()?;
        self.canvas.validate()
    }
}
