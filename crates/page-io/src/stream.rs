//! Lazy page loading.
//!
//! `PageStream` decodes one page per `next()` call, so a consumer that
//! drops each page before pulling the next keeps a single decoded page in
//! memory regardless of book length.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::info;

use crate::Result;
use crate::decode::load_page;
use crate::folder::list_image_files;

/// One pulled page: its position, source, and decode outcome.
#[derive(Debug)]
pub struct LoadedPage {
    pub index: usize,
    pub path: PathBuf,
    pub image: Result<DynamicImage>,
}

/// Pull-based iterator over page images.
#[derive(Debug)]
pub struct PageStream {
    paths: std::vec::IntoIter<PathBuf>,
    next_index: usize,
}

impl PageStream {
    /// Stream the given paths in order.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths: paths.into_iter(),
            next_index: 0,
        }
    }

    /// Stream every image file in `dir`, in natural file-name order.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Ok(Self::new(list_image_files(dir)?))
    }
}

impl Iterator for PageStream {
    type Item = LoadedPage;

    fn next(&mut self) -> Option<LoadedPage> {
        let path = self.paths.next()?;
        let index = self.next_index;
        self.next_index += 1;

        info!(index, path = %path.display(), "Processing image file");
        let image = load_page(&path);
        Some(LoadedPage { index, path, image })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}

impl ExactSizeIterator for PageStream {}
