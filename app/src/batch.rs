//! Batch driver: pulls pages from a stream, splits them, writes JPEGs.
//!
//! A page that fails to decode, split, or save is recorded in the
//! manifest and skipped; the run always continues with the next page.

use std::path::{Path, PathBuf};

use page_io::{LoadedPage, save_jpeg};
use panel_splitter::{PageSplitter, SplitOptions};
use tracing::{error, info, warn};

use crate::manifest::{Manifest, PageRecord};

/// File name for output `k` of page `index` (both zero-based).
pub fn output_file_name(index: usize, k: usize) -> String {
    format!("page_{:04}_{:02}.jpg", index + 1, k + 1)
}

/// Splits a stream of pages into canvas JPEGs inside one output folder.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    splitter: PageSplitter,
    output_dir: PathBuf,
    quality: u8,
}

impl BatchRunner {
    pub fn new(options: SplitOptions, output_dir: &Path, quality: u8) -> Self {
        Self {
            splitter: PageSplitter::new(options),
            output_dir: output_dir.to_path_buf(),
            quality,
        }
    }

    /// Process every page of the stream and collect the manifest.
    ///
    /// Pages are pulled one at a time; each decoded page is dropped as soon
    /// as its outputs are written.
    #[cfg(not(feature = "rayon"))]
    pub fn run<I>(&self, pages: I) -> Manifest
    where
        I: IntoIterator<Item = LoadedPage>,
    {
        let records = pages.into_iter().map(|page| self.process(page)).collect();
        self.finish(records)
    }

    /// Process every page of the stream in parallel and collect the manifest.
    ///
    /// Pages are independent; the manifest is ordered by page index.
    #[cfg(feature = "rayon")]
    pub fn run<I>(&self, pages: I) -> Manifest
    where
        I: IntoIterator<Item = LoadedPage>,
        I::IntoIter: Send,
    {
        use rayon::prelude::*;

        let records = pages
            .into_iter()
            .par_bridge()
            .map(|page| self.process(page))
            .collect();
        self.finish(records)
    }

    fn finish(&self, records: Vec<PageRecord>) -> Manifest {
        let canvas = self.splitter.options().canvas;
        let manifest = Manifest::new(canvas.width, canvas.height, records);
        info!(
            pages = manifest.total_pages,
            outputs = manifest.total_outputs,
            failed = manifest.failed_pages,
            "Batch finished"
        );
        manifest
    }

    /// Split and save one page, recording any failure instead of returning it.
    pub fn process(&self, page: LoadedPage) -> PageRecord {
        let LoadedPage { index, path, image } = page;
        let mut record = PageRecord {
            index,
            source: path,
            style: None,
            outputs: Vec::new(),
            error: None,
        };

        let image = match image {
            Ok(image) => image,
            Err(e) => {
                warn!(index, "Skipping page that failed to load: {e}");
                record.error = Some(e.to_string());
                return record;
            }
        };

        let output = match self.splitter.split_page(&image, index) {
            Ok(output) => output,
            Err(e) => {
                error!(index, "Error processing page: {e}");
                record.error = Some(e.to_string());
                return record;
            }
        };
        drop(image);
        record.style = Some(output.style.as_str().to_string());

        for (k, canvas) in output.images.iter().enumerate() {
            let target = self.output_dir.join(output_file_name(index, k));
            if let Err(e) = save_jpeg(canvas, &target, self.quality) {
                error!(index, "Error saving page output: {e}");
                record.error = Some(e.to_string());
                break;
            }
            record.outputs.push(target);
        }
        record
    }
}
