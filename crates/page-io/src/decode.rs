//! Page decoding. Every page is normalized to 8-bit RGB.

use std::path::Path;

use image::DynamicImage;
use tracing::{info, warn};

use crate::{PageIoError, Result};

/// Load a page image from disk as RGB.
pub fn load_page(path: &Path) -> Result<DynamicImage> {
    match image::open(path) {
        Ok(img) => {
            info!(path = %path.display(), width = img.width(), height = img.height(), "Loaded image");
            Ok(DynamicImage::ImageRgb8(img.to_rgb8()))
        }
        Err(source) => {
            warn!(path = %path.display(), "Error loading image: {source}");
            Err(PageIoError::Decode {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Load a page image from an in-memory buffer as RGB.
pub fn load_page_from_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(bytes).map_err(PageIoError::DecodeBytes)?;
    info!(
        width = img.width(),
        height = img.height(),
        "Loaded image from byte data"
    );
    Ok(DynamicImage::ImageRgb8(img.to_rgb8()))
}
