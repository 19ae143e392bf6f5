//! Page splitting for fixed-size screen output.
//!
//! Detects horizontal dead zones (blank or dark rows) in scanned comic
//! pages, splits tall pages into panels, trims blank margins, and fits
//! each piece onto a fixed canvas with a contrasting background.

pub mod canvas;
pub mod classify;
pub mod crop;
pub mod gaps;
pub mod luma;
pub mod options;
pub mod segment;
pub mod splitter;
pub mod style;

// Re-exports for convenience
pub use canvas::{Background, fit_to_canvas};
pub use classify::{RowClass, classify_row};
pub use crop::{BoundingBox, crop_to_content};
pub use gaps::detect_dead_rows;
pub use luma::{page_luma, rgb_luma};
pub use options::{CanvasSize, SplitOptions, Thresholds};
pub use segment::{Segment, segment_rows};
pub use splitter::PageSplitter;
pub use style::{PageStyle, classify_page};

/// Errors raised while processing a single page.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("Image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Dark threshold {dark} must be below light threshold {light}")]
    InvalidThresholds { light: u8, dark: u8 },

    #[error("Canvas dimensions must be non-zero: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("Segment rows {start}..{end} fall outside image height {height}")]
    InvalidSegment { start: u32, end: u32, height: u32 },
}

/// Result type alias for page splitting operations.
pub type Result<T> = std::result::Result<T, SplitError>;

/// Reject images with a zero dimension before any row or pixel scan.
pub(crate) fn ensure_non_empty(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SplitError::EmptyImage { width, height });
    }
    Ok(())
}
