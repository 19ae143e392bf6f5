//! JPEG encoding of finished canvas images.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use tracing::info;

use crate::{PageIoError, Result};

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

fn check_quality(quality: u8) -> Result<()> {
    if !(1..=100).contains(&quality) {
        return Err(PageIoError::InvalidQuality(quality));
    }
    Ok(())
}

/// Encode an image to JPEG bytes.
pub fn encode_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    check_quality(quality)?;
    let mut bytes = Vec::new();
    img.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality))
        .map_err(PageIoError::EncodeBytes)?;
    Ok(bytes)
}

/// Save an image as JPEG at `path`.
pub fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    check_quality(quality)?;
    let io_err = |source: std::io::Error| PageIoError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    img.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))
        .map_err(|source| PageIoError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(io_err)?;

    info!(path = %path.display(), quality, "Saved image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_encode_produces_jpeg_bytes() {
        let img = RgbImage::from_pixel(16, 8, Rgb([10, 200, 30]));
        let bytes = encode_jpeg(&img, DEFAULT_JPEG_QUALITY).unwrap();
        // JPEG SOI marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }

    #[test]
    fn test_quality_out_of_range_is_rejected() {
        let img = RgbImage::new(2, 2);
        assert!(matches!(
            encode_jpeg(&img, 0),
            Err(PageIoError::InvalidQuality(0))
        ));
        assert!(matches!(
            encode_jpeg(&img, 101),
            Err(PageIoError::InvalidQuality(101))
        ));
    }

    #[test]
    fn test_save_jpeg_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let img = RgbImage::from_pixel(20, 30, Rgb([255, 255, 255]));
        save_jpeg(&img, &path, 85).unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (20, 30));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.jpg");
        let result = save_jpeg(&RgbImage::new(2, 2), &path, 75);
        assert!(matches!(result, Err(PageIoError::Io { .. })));
    }
}
