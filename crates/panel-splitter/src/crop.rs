//! Content cropping: trim blank and dark margins.

use image::{DynamicImage, GrayImage};
use tracing::{debug, warn};

use crate::luma::page_luma;
use crate::options::Thresholds;

/// Half-open pixel box `[x0, x1) x [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    /// Box covering an entire `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: width,
            y1: height,
        }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Grow the box to include pixel `(x, y)`.
    fn include(&mut self, x: u32, y: u32) {
        self.x0 = self.x0.min(x);
        self.y0 = self.y0.min(y);
        self.x1 = self.x1.max(x + 1);
        self.y1 = self.y1.max(y + 1);
    }
}

/// Minimal box covering every pixel that is neither blank nor dark.
///
/// Returns `None` when no pixel survives the mask.
pub fn content_bbox(gray: &GrayImage, thresholds: Thresholds) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;
    for (x, y, pixel) in gray.enumerate_pixels() {
        if !thresholds.is_content(pixel.0[0]) {
            continue;
        }
        match bbox.as_mut() {
            Some(b) => b.include(x, y),
            None => {
                bbox = Some(BoundingBox {
                    x0: x,
                    y0: y,
                    x1: x + 1,
                    y1: y + 1,
                })
            }
        }
    }
    bbox
}

/// Crop an image to its content box.
///
/// An image that is entirely blank or dark comes back unchanged.
pub fn crop_to_content(img: &DynamicImage, thresholds: Thresholds) -> DynamicImage {
    let gray = page_luma(img);
    match content_bbox(&gray, thresholds) {
        Some(b) if b == BoundingBox::full(img.width(), img.height()) => {
            debug!("Content fills the whole image, nothing to crop");
            img.clone()
        }
        Some(b) => {
            debug!(
                x0 = b.x0,
                y0 = b.y0,
                x1 = b.x1,
                y1 = b.y1,
                "Cropping image to content"
            );
            img.crop_imm(b.x0, b.y0, b.width(), b.height())
        }
        None => {
            warn!(
                width = img.width(),
                height = img.height(),
                "No content region found, keeping original image"
            );
            img.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    const T: Thresholds = Thresholds::SEGMENT;

    #[test]
    fn test_bbox_of_single_block() {
        let mut img = GrayImage::from_pixel(100, 80, Luma([255]));
        draw_filled_rect_mut(&mut img, Rect::at(10, 20).of_size(30, 15), Luma([128]));
        let b = content_bbox(&img, T).unwrap();
        assert_eq!(
            b,
            BoundingBox {
                x0: 10,
                y0: 20,
                x1: 40,
                y1: 35
            }
        );
    }

    #[test]
    fn test_bbox_spans_disjoint_blocks() {
        let mut img = GrayImage::from_pixel(100, 80, Luma([0]));
        draw_filled_rect_mut(&mut img, Rect::at(5, 60).of_size(2, 2), Luma([100]));
        draw_filled_rect_mut(&mut img, Rect::at(90, 3).of_size(4, 4), Luma([200]));
        let b = content_bbox(&img, T).unwrap();
        assert_eq!((b.x0, b.y0, b.x1, b.y1), (5, 3, 94, 62));
        assert!(b.x1 <= img.width() && b.y1 <= img.height());
    }

    #[test]
    fn test_bbox_is_minimal() {
        let mut img = GrayImage::from_pixel(50, 50, Luma([255]));
        img.put_pixel(0, 49, Luma([60]));
        img.put_pixel(49, 0, Luma([60]));
        let b = content_bbox(&img, T).unwrap();
        assert_eq!(b, BoundingBox::full(50, 50));

        // Shrinking any edge would drop a content pixel
        let mut img = GrayImage::from_pixel(50, 50, Luma([255]));
        img.put_pixel(25, 25, Luma([60]));
        let b = content_bbox(&img, T).unwrap();
        assert_eq!((b.width(), b.height()), (1, 1));
    }

    #[test]
    fn test_crop_keeps_content_pixels() {
        let mut img = RgbImage::from_pixel(60, 40, Rgb([255, 255, 255]));
        draw_filled_rect_mut(&mut img, Rect::at(20, 10).of_size(10, 5), Rgb([200, 40, 40]));
        let cropped = crop_to_content(&DynamicImage::ImageRgb8(img), T);
        assert_eq!((cropped.width(), cropped.height()), (10, 5));
        assert_eq!(cropped.to_rgb8().get_pixel(0, 0), &Rgb([200, 40, 40]));
    }

    #[test]
    fn test_dark_red_panel_on_black_is_content() {
        // (100, 0, 0) weighs in at 30, exactly the dark threshold
        let mut img = RgbImage::from_pixel(100, 100, Rgb([0, 0, 0]));
        draw_filled_rect_mut(&mut img, Rect::at(30, 30).of_size(40, 40), Rgb([100, 0, 0]));
        let cropped = crop_to_content(&DynamicImage::ImageRgb8(img), T);
        assert_eq!((cropped.width(), cropped.height()), (40, 40));
        assert_eq!(cropped.to_rgb8().get_pixel(0, 0), &Rgb([100, 0, 0]));
    }

    #[test]
    fn test_all_blank_image_is_returned_unchanged() {
        // 250 > 240 everywhere, so nothing survives the mask
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(100, 100, Luma([250])));
        let out = crop_to_content(&img, T);
        assert_eq!(out, img);
    }

    #[test]
    fn test_all_dark_image_is_returned_unchanged() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(40, 30, Luma([10])));
        let out = crop_to_content(&img, T);
        assert_eq!(out, img);
    }

    #[test]
    fn test_uniform_mid_gray_is_all_content() {
        // 128 is neither above 240 nor below 30
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(100, 100, Luma([128])));
        let gray = page_luma(&img);
        assert_eq!(content_bbox(&gray, T), Some(BoundingBox::full(100, 100)));
        assert_eq!(crop_to_content(&img, T).width(), 100);
    }
}
