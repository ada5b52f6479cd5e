//! Content enumeration and per-file loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rayon::prelude::*;

use super::IndexError;
use crate::config::IndexConfig;
use crate::debug;
use crate::post::PostRecord;

/// List post files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. A missing or unreadable directory
/// is an error.
pub fn collect_post_files(dir: &Path, config: &IndexConfig) -> Result<Vec<PathBuf>, IndexError> {
    if !dir.is_dir() {
        return Err(IndexError::MissingContentDir(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort(true)
        .skip_hidden(false)
        .follow_links(true);

    for entry in walker {
        let entry = entry
            .map_err(|e| IndexError::ReadDir(dir.to_path_buf(), io::Error::other(e.to_string())))?;
        let path = entry.path();
        if entry.file_type().is_file() && config.is_content_file(&path) {
            files.push(path);
        } else {
            debug!("scan"; "skipping {}", path.display());
        }
    }

    Ok(files)
}

/// Read and normalize every file, in the order given.
///
/// Files are read in parallel; the first unreadable file fails the whole
/// batch.
pub fn load_posts(files: &[PathBuf]) -> Result<Vec<PostRecord>, IndexError> {
    files
        .par_iter()
        .map(|path| {
            let content =
                fs::read_to_string(path).map_err(|e| IndexError::ReadFile(path.clone(), e))?;
            Ok(PostRecord::from_source(path, &content))
        })
        .collect()
}
