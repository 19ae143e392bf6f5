//! Page layout classification: manga page vs. comic strip.

use image::{DynamicImage, RgbImage};
use tracing::info;

/// Layout regime of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStyle {
    /// A single panel-page: cropped once and fitted whole.
    Manga,
    /// Several stacked panels: split at dead rows first.
    Strip,
}

impl PageStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            PageStyle::Manga => "manga",
            PageStyle::Strip => "strip",
        }
    }
}

/// True if any pixel has unequal color channels.
///
/// Single-channel images are never colored.
pub fn is_colored(img: &DynamicImage) -> bool {
    if !img.color().has_color() {
        return false;
    }
    match img.as_rgb8() {
        Some(rgb) => has_chroma(rgb),
        None => has_chroma(&img.to_rgb8()),
    }
}

fn has_chroma(rgb: &RgbImage) -> bool {
    rgb.pixels().any(|p| p[0] != p[1] || p[1] != p[2])
}

/// Decide how a page should be processed.
///
/// The first page (the cover) is always treated as a manga page. Other
/// pages are strips only when wider than `strip_aspect_ratio` and colored.
pub fn classify_page(img: &DynamicImage, page_index: usize, strip_aspect_ratio: f64) -> PageStyle {
    if page_index == 0 {
        info!(page_index, "Cover page, treating as manga page");
        return PageStyle::Manga;
    }
    if img.height() == 0 {
        return PageStyle::Manga;
    }

    let aspect_ratio = f64::from(img.width()) / f64::from(img.height());
    let style = if aspect_ratio > strip_aspect_ratio && is_colored(img) {
        PageStyle::Strip
    } else {
        PageStyle::Manga
    };

    info!(
        page_index,
        aspect_ratio,
        style = style.as_str(),
        "Classified page"
    );
    style
}
