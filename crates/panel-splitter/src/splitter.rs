//! Per-page orchestration.
//!
//! Routes each page through either the single-crop manga path or the
//! strip path (dead rows, segments, per-segment crop), and fits every
//! result onto the canvas.

use image::{DynamicImage, RgbImage};
use tracing::{debug, error, info};

use crate::canvas::fit_to_canvas;
use crate::crop::crop_to_content;
use crate::gaps::detect_dead_rows;
use crate::luma::page_luma;
use crate::options::SplitOptions;
use crate::segment::{Segment, segment_rows};
use crate::style::{PageStyle, classify_page};
use crate::{Result, SplitError, ensure_non_empty};

/// Canvas-sized images produced from one input page.
#[derive(Debug, Clone)]
pub struct PageOutput {
    pub page_index: usize,
    pub style: PageStyle,
    pub images: Vec<RgbImage>,
}

/// Splits pages into display-ready canvas images.
///
/// Holds only configuration; every call is independent of the others.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageSplitter {
    options: SplitOptions,
}

impl PageSplitter {
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Split one page, returning any processing error to the caller.
    pub fn split_page(&self, img: &DynamicImage, page_index: usize) -> Result<PageOutput> {
        self.options.validate()?;
        ensure_non_empty(img.width(), img.height())?;

        let style = classify_page(img, page_index, self.options.strip_aspect_ratio);
        let images = match style {
            PageStyle::Manga => vec![self.fit_manga_page(img)?],
            PageStyle::Strip => self.split_strip_page(img)?,
        };

        info!(
            page_index,
            style = style.as_str(),
            outputs = images.len(),
            "Processed page"
        );
        Ok(PageOutput {
            page_index,
            style,
            images,
        })
    }

    /// Split one page; a failing page yields no images.
    pub fn process_page(&self, img: &DynamicImage, page_index: usize) -> Vec<RgbImage> {
        match self.split_page(img, page_index) {
            Ok(output) => output.images,
            Err(e) => {
                error!(page_index, "Error processing page: {e}");
                Vec::new()
            }
        }
    }

    fn fit_manga_page(&self, img: &DynamicImage) -> Result<RgbImage> {
        let cropped = crop_to_content(img, self.options.page_thresholds);
        fit_to_canvas(&cropped, self.options.canvas)
    }

    fn split_strip_page(&self, img: &DynamicImage) -> Result<Vec<RgbImage>> {
        let opts = &self.options;
        let gray = page_luma(img);
        let dead_rows = detect_dead_rows(&gray, opts.page_thresholds);
        drop(gray);

        let segments = segment_rows(
            &dead_rows,
            img.height(),
            opts.min_gap,
            opts.min_segment_height,
        );

        let mut images = Vec::with_capacity(segments.len());
        for segment in segments {
            let piece = crop_segment(img, segment)?;
            let cropped = crop_to_content(&piece, opts.segment_thresholds);
            images.push(fit_to_canvas(&cropped, opts.canvas)?);
        }

        debug!(outputs = images.len(), "Split strip page into segments");
        Ok(images)
    }
}

/// Copy the full-width row range of a segment out of the page.
fn crop_segment(img: &DynamicImage, segment: Segment) -> Result<DynamicImage> {
    if segment.end <= segment.start || segment.end > img.height() {
        return Err(SplitError::InvalidSegment {
            start: segment.start,
            end: segment.end,
            height: img.height(),
        });
    }
    Ok(img.crop_imm(0, segment.start, img.width(), segment.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Thresholds;
    use image::{GrayImage, Luma, Rgb};
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    const RED: Rgb<u8> = Rgb([200, 40, 40]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn splitter() -> PageSplitter {
        PageSplitter::new(SplitOptions::new().with_canvas(120, 160))
    }

    /// Wide colored page: three red panels separated by white gutters
    /// and two full-width black bands.
    fn strip_page() -> DynamicImage {
        let mut img = RgbImage::from_pixel(1800, 1000, Rgb([255, 255, 255]));
        for y in [50, 400, 750] {
            draw_filled_rect_mut(&mut img, Rect::at(100, y).of_size(1600, 200), RED);
        }
        draw_filled_rect_mut(&mut img, Rect::at(0, 300).of_size(1800, 51), BLACK);
        draw_filled_rect_mut(&mut img, Rect::at(0, 650).of_size(1800, 51), BLACK);
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_strip_page_splits_into_panels() {
        let output = splitter().split_page(&strip_page(), 3).unwrap();
        assert_eq!(output.style, PageStyle::Strip);
        assert_eq!(output.images.len(), 3);
        for img in &output.images {
            assert_eq!(img.dimensions(), (120, 160));
        }
    }

    #[test]
    fn test_cover_page_is_never_split() {
        let output = splitter().split_page(&strip_page(), 0).unwrap();
        assert_eq!(output.style, PageStyle::Manga);
        assert_eq!(output.images.len(), 1);
        assert_eq!(output.images[0].dimensions(), (120, 160));
    }

    #[test]
    fn test_grayscale_page_takes_single_crop_path() {
        let mut img = GrayImage::from_pixel(1800, 1000, Luma([255]));
        draw_filled_rect_mut(&mut img, Rect::at(100, 50).of_size(1600, 200), Luma([90]));
        draw_filled_rect_mut(&mut img, Rect::at(100, 600).of_size(1600, 200), Luma([90]));
        let output = splitter()
            .split_page(&DynamicImage::ImageLuma8(img), 5)
            .unwrap();
        assert_eq!(output.style, PageStyle::Manga);
        assert_eq!(output.images.len(), 1);
    }

    #[test]
    fn test_short_panel_is_dropped() {
        let mut img = RgbImage::from_pixel(1800, 1000, Rgb([255, 255, 255]));
        // 40 rows of content: too short
        draw_filled_rect_mut(&mut img, Rect::at(100, 100).of_size(1600, 40), RED);
        draw_filled_rect_mut(&mut img, Rect::at(100, 500).of_size(1600, 300), RED);
        let output = splitter()
            .split_page(&DynamicImage::ImageRgb8(img), 1)
            .unwrap();
        assert_eq!(output.style, PageStyle::Strip);
        assert_eq!(output.images.len(), 1);
    }

    #[test]
    fn test_blank_strip_page_yields_nothing() {
        // A single colored pixel makes it a strip; every row still counts as blank
        let mut img = RgbImage::from_pixel(1800, 1000, Rgb([255, 255, 255]));
        img.put_pixel(10, 10, Rgb([250, 245, 255]));
        let images = splitter().process_page(&DynamicImage::ImageRgb8(img), 2);
        assert!(images.is_empty());
    }

    #[test]
    fn test_invalid_options_yield_no_output() {
        let bad = PageSplitter::new(
            SplitOptions::new().with_page_thresholds(Thresholds::new(10, 200)),
        );
        let page = strip_page();
        assert!(matches!(
            bad.split_page(&page, 1),
            Err(SplitError::InvalidThresholds { .. })
        ));
        assert!(bad.process_page(&page, 1).is_empty());
    }

    #[test]
    fn test_empty_page_yields_no_output() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        assert!(splitter().process_page(&img, 4).is_empty());
    }

    #[test]
    fn test_failed_page_does_not_affect_next() {
        let s = splitter();
        let empty = DynamicImage::ImageRgb8(RgbImage::new(0, 10));
        let page = strip_page();
        assert!(s.process_page(&empty, 1).is_empty());
        assert_eq!(s.process_page(&page, 2).len(), 3);
    }

    #[test]
    fn test_crop_segment_rejects_out_of_range_rows() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
        let result = crop_segment(&img, Segment { start: 5, end: 11 });
        assert!(matches!(result, Err(SplitError::InvalidSegment { .. })));
        let piece = crop_segment(&img, Segment { start: 2, end: 7 }).unwrap();
        assert_eq!((piece.width(), piece.height()), (10, 5));
    }
}
