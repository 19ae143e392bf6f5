//! Page image input and output.
//!
//! Decoding pages from disk or memory, JPEG encoding, image-folder
//! housekeeping, and a lazy page stream that keeps one decoded page
//! alive at a time.

pub mod decode;
pub mod encode;
pub mod folder;
pub mod stream;

use std::path::PathBuf;

// Re-exports for convenience
pub use decode::{load_page, load_page_from_bytes};
pub use encode::{DEFAULT_JPEG_QUALITY, encode_jpeg, save_jpeg};
pub use folder::{IMAGE_EXTENSIONS, delete_images_in_folder, is_image_file, list_image_files};
pub use stream::{LoadedPage, PageStream};

/// Errors raised by page decoding, encoding, and folder operations.
#[derive(Debug, thiserror::Error)]
pub enum PageIoError {
    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to decode image from bytes: {0}")]
    DecodeBytes(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    EncodeBytes(#[source] image::ImageError),

    #[error("Failed to encode image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JPEG quality must be between 1 and 100, got {0}")]
    InvalidQuality(u8),
}

/// Result type alias for page I/O operations.
pub type Result<T> = std::result::Result<T, PageIoError>;
