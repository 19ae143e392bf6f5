//! Run manifest handed to the document-assembly stage.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Outcome for one input page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub index: usize,
    pub source: PathBuf,
    /// `manga` or `strip`; absent when the page never reached the splitter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    pub outputs: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Every page of a run, in page order, plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub total_pages: usize,
    pub total_outputs: usize,
    pub failed_pages: usize,
    pub pages: Vec<PageRecord>,
}

impl Manifest {
    /// Build a manifest; records are sorted by page index.
    pub fn new(canvas_width: u32, canvas_height: u32, mut pages: Vec<PageRecord>) -> Self {
        pages.sort_by_key(|p| p.index);
        Self {
            canvas_width,
            canvas_height,
            total_pages: pages.len(),
            total_outputs: pages.iter().map(|p| p.outputs.len()).sum(),
            failed_pages: pages.iter().filter(|p| p.error.is_some()).count(),
            pages,
        }
    }

    /// Output images across all pages, in reading order.
    pub fn outputs(&self) -> impl Iterator<Item = &Path> {
        self.pages
            .iter()
            .flat_map(|p| p.outputs.iter().map(PathBuf::as_path))
    }

    /// Write the manifest as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create manifest {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).context("failed to serialize manifest")?;
        writer.flush()?;
        Ok(())
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open manifest {}", path.display()))?;
        serde_json::from_reader(file).context("failed to parse manifest")
    }
}
