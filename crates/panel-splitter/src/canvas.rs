//! Fitting images onto a fixed-size canvas.
//!
//! Scale-to-fit with Lanczos3 filtering, centered on a black or white
//! background picked for contrast against the resized content.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use imageproc::stats::histogram;
use tracing::debug;

use crate::luma::rgb_luma;
use crate::options::CanvasSize;
use crate::{Result, ensure_non_empty};

/// Canvas fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Black,
    White,
}

impl Background {
    pub fn rgb(self) -> Rgb<u8> {
        match self {
            Background::Black => Rgb([0, 0, 0]),
            Background::White => Rgb([255, 255, 255]),
        }
    }

    /// Pick the background with the larger distance from the mean intensity.
    ///
    /// Ties go to white.
    pub fn for_mean(mean: f64) -> Self {
        let contrast_with_white = (255.0 - mean).abs();
        let contrast_with_black = mean;
        if contrast_with_white > contrast_with_black {
            Background::Black
        } else {
            Background::White
        }
    }

    /// Background for a grayscale image, from its mean intensity.
    pub fn for_image(gray: &GrayImage) -> Self {
        Self::for_mean(mean_intensity(gray))
    }
}

/// Mean grayscale intensity; zero for an empty image.
pub fn mean_intensity(gray: &GrayImage) -> f64 {
    let hist = histogram(gray);
    let counts = &hist.channels[0];
    let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if total == 0 {
        return 0.0;
    }
    let weighted: u64 = counts
        .iter()
        .enumerate()
        .map(|(value, &c)| value as u64 * u64::from(c))
        .sum();
    weighted as f64 / total as f64
}

/// Dimensions of a `width x height` image scaled to fit inside `canvas`.
///
/// Relatively wider images take the full canvas width, all others the full
/// canvas height. The other side is floored and never drops below 1.
pub fn fit_dimensions(width: u32, height: u32, canvas: CanvasSize) -> (u32, u32) {
    let (w, h) = (u64::from(width), u64::from(height));
    let (cw, ch) = (u64::from(canvas.width), u64::from(canvas.height));

    // width / height > cw / ch, compared without floating point
    if w * ch > cw * h {
        let new_height = (cw * h / w).max(1);
        (canvas.width, new_height as u32)
    } else {
        let new_width = (ch * w / h).max(1);
        (new_width as u32, canvas.height)
    }
}

/// Resize `img` to fit the canvas and center it on a contrasting background.
///
/// The result is always exactly `canvas.width x canvas.height`.
pub fn fit_to_canvas(img: &DynamicImage, canvas: CanvasSize) -> Result<RgbImage> {
    canvas.validate()?;
    let (orig_w, orig_h) = (img.width(), img.height());
    ensure_non_empty(orig_w, orig_h)?;

    let (new_width, new_height) = fit_dimensions(orig_w, orig_h, canvas);
    let resized = if (new_width, new_height) == (orig_w, orig_h) {
        img.to_rgb8()
    } else {
        img.resize_exact(new_width, new_height, FilterType::Lanczos3)
            .to_rgb8()
    };

    let background = Background::for_image(&rgb_luma(&resized));
    let paste_x = (canvas.width - new_width) / 2;
    let paste_y = (canvas.height - new_height) / 2;

    debug!(
        orig_w,
        orig_h,
        new_width,
        new_height,
        paste_x,
        paste_y,
        ?background,
        "Fitting image onto canvas"
    );

    let mut out = RgbImage::from_pixel(canvas.width, canvas.height, background.rgb());
    imageops::replace(&mut out, &resized, i64::from(paste_x), i64::from(paste_y));
    Ok(out)
}
