//! File system scanner for GDY trees.
//!
//! Walks the games directory top-down and lists, for every directory, the
//! files it holds and its immediate subdirectories.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DocError, Result};
use crate::gdy::GDY_EXTENSION;

/// Title of the root index page.
pub const ROOT_TITLE: &str = "Games";

/// One directory of the games tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Absolute or root-joined path of the directory.
    pub path: PathBuf,
    /// Path relative to the scanned root (empty for the root itself).
    pub relative: PathBuf,
    /// Files directly inside the directory, sorted by name.
    pub files: Vec<PathBuf>,
    /// Names of immediate subdirectories, sorted.
    pub subdirectories: Vec<String>,
}

impl DirectoryListing {
    /// Title for this directory's index page.
    pub fn title(&self) -> String {
        let parts: Vec<String> = self
            .relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        if parts.is_empty() {
            ROOT_TITLE.to_string()
        } else {
            parts.join("/")
        }
    }

    /// Files that are game descriptions.
    pub fn gdy_files(&self) -> impl Iterator<Item = &PathBuf> + '_ {
        self.files.iter().filter(|f| is_gdy_file(f))
    }
}

/// Check whether a file name ends in the GDY extension.
pub fn is_gdy_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(GDY_EXTENSION))
}

/// Scan a games tree.
///
/// Directories are returned parents first, siblings in name order.
pub fn scan_tree(root: &Path) -> Result<Vec<DirectoryListing>> {
    if !root.is_dir() {
        return Err(DocError::Io {
            path: root.to_path_buf(),
            message: "Games directory not found".to_string(),
        });
    }

    let mut listings = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path().to_path_buf();
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        let (files, subdirectories) = list_directory(&path)?;

        listings.push(DirectoryListing {
            path,
            relative,
            files,
            subdirectories,
        });
    }

    Ok(listings)
}

fn list_directory(dir: &Path) -> Result<(Vec<PathBuf>, Vec<String>)> {
    let mut files = Vec::new();
    let mut subdirectories = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if entry.file_type().is_dir() {
            subdirectories.push(entry.file_name().to_string_lossy().into_owned());
        } else {
            files.push(entry.into_path());
        }
    }

    Ok((files, subdirectories))
}

fn walk_error(root: &Path, error: walkdir::Error) -> DocError {
    DocError::Io {
        path: error.path().unwrap_or(root).to_path_buf(),
        message: format!("Failed to scan directory: {}", error),
    }
}
