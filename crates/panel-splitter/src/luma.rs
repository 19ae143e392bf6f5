//! Grayscale conversion shared by every intensity test.
//!
//! Uses ITU-R 601-2 weights (0.299, 0.587, 0.114) in 16-bit fixed point
//! with rounding, so dead rows, crop boxes and background choices agree
//! with the usual "L" conversion of scanned pages.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::map::map_colors;

/// Intensity of one RGB pixel.
#[inline]
pub fn rgb_to_luma(p: Rgb<u8>) -> u8 {
    let [r, g, b] = p.0;
    let l = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000;
    (l >> 16) as u8
}

/// Grayscale copy of an RGB image.
pub fn rgb_luma(rgb: &RgbImage) -> GrayImage {
    map_colors(rgb, |p| Luma([rgb_to_luma(p)]))
}

/// Grayscale copy of any page. Single-channel 8-bit pages are copied as-is.
pub fn page_luma(img: &DynamicImage) -> GrayImage {
    match img {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        DynamicImage::ImageRgb8(rgb) => rgb_luma(rgb),
        other => rgb_luma(&other.to_rgb8()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_weights() {
        assert_eq!(rgb_to_luma(Rgb([255, 0, 0])), 76);
        assert_eq!(rgb_to_luma(Rgb([0, 255, 0])), 150);
        assert_eq!(rgb_to_luma(Rgb([0, 0, 255])), 29);
    }

    #[test]
    fn test_gray_and_extremes_are_preserved() {
        assert_eq!(rgb_to_luma(Rgb([0, 0, 0])), 0);
        assert_eq!(rgb_to_luma(Rgb([255, 255, 255])), 255);
        assert_eq!(rgb_to_luma(Rgb([128, 128, 128])), 128);
    }

    #[test]
    fn test_saturated_colors() {
        assert_eq!(rgb_to_luma(Rgb([0, 0, 200])), 23);
        assert_eq!(rgb_to_luma(Rgb([100, 0, 0])), 30);
    }

    #[test]
    fn test_page_luma_keeps_gray_pages() {
        let gray = GrayImage::from_pixel(3, 2, Luma([77]));
        assert_eq!(page_luma(&DynamicImage::ImageLuma8(gray.clone())), gray);
    }

    #[test]
    fn test_page_luma_converts_rgb_pages() {
        let rgb = RgbImage::from_pixel(2, 2, Rgb([0, 0, 200]));
        let gray = page_luma(&DynamicImage::ImageRgb8(rgb));
        assert_eq!(gray.dimensions(), (2, 2));
        assert!(gray.pixels().all(|p| p.0[0] == 23));
    }
}
