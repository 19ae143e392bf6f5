//! Dead-row detection across a whole grayscale page.

use image::GrayImage;
use tracing::debug;

use crate::classify::classify_row;
use crate::options::Thresholds;

/// Scan rows top to bottom and return the indices of blank or dark rows.
///
/// The result is strictly increasing and every index is below the image height.
pub fn detect_dead_rows(img: &GrayImage, thresholds: Thresholds) -> Vec<u32> {
    let (width, height) = img.dimensions();
    if width == 0 {
        return Vec::new();
    }

    let dead: Vec<u32> = img
        .as_raw()
        .chunks_exact(width as usize)
        .enumerate()
        .filter(|(_, row)| classify_row(row, thresholds).is_dead())
        .map(|(y, _)| y as u32)
        .collect();

    debug!(
        width,
        height,
        dead_rows = dead.len(),
        light = thresholds.light,
        dark = thresholds.dark,
        "Detected blank or dark rows"
    );
    dead
}
