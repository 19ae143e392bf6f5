//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, settings_help};

/// Split scanned comic pages into screen-sized images.
#[derive(Debug, Clone, Parser)]
#[command(name = "manga-splitter", version, after_help = settings_help())]
pub struct Args {
    /// Folder containing the page images, read in file-name order.
    pub input_dir: PathBuf,

    /// Folder the canvas images are written to (created if missing).
    pub output_dir: PathBuf,

    /// Delete existing images in the output folder before writing.
    #[arg(long)]
    pub clean: bool,

    /// Canvas width in pixels (overrides SCREEN_WIDTH).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=16384))]
    pub width: Option<u32>,

    /// Canvas height in pixels (overrides SCREEN_HEIGHT).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=16384))]
    pub height: Option<u32>,

    /// JPEG quality 1-100 (overrides JPEG_QUALITY).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Manifest path [default: <OUTPUT_DIR>/manifest.json].
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(width) = self.width {
            config.screen_width = width;
        }
        if let Some(height) = self.height {
            config.screen_height = height;
        }
        if let Some(quality) = self.quality {
            config.jpeg_quality = quality;
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| self.output_dir.join("manifest.json"))
    }
}
