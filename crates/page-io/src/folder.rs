//! Image folder listing and cleanup.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{PageIoError, Result};

/// File extensions recognized as page images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp"];

/// True if `path` has one of [`IMAGE_EXTENSIONS`].
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

fn image_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| PageIoError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_image_file(&path) {
            paths.push(path);
        }
    }
    Ok(paths)
}

/// List image files directly inside `dir` in natural file-name order.
///
/// Digit runs compare by value, so `2.png` sorts before `10.png`.
pub fn list_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = image_entries(dir)?;
    paths.sort_by(|a, b| {
        let a = a.file_name().unwrap_or_default().to_string_lossy();
        let b = b.file_name().unwrap_or_default().to_string_lossy();
        natord::compare(&a, &b)
    });
    info!(dir = %dir.display(), count = paths.len(), "Listed image files");
    Ok(paths)
}

/// Delete every image file directly inside `dir`. Returns how many were removed.
///
/// Non-image files and subdirectories are left alone.
pub fn delete_images_in_folder(dir: &Path) -> Result<usize> {
    let paths = image_entries(dir)?;
    for path in &paths {
        fs::remove_file(path).map_err(|source| PageIoError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "Deleted image");
    }
    Ok(paths.len())
}
