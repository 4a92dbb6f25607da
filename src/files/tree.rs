//! Directory tree data structures and directory scanning.

use super::handle::{file_name_of, FileHandle};
use crate::error::{Error, Result};
use log::{debug, error, warn};
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Directory Tree
// ─────────────────────────────────────────────────────────────────────────────

/// A directory listing with its files and sub-directories.
///
/// Files and directories are each sorted by name at every level.
#[derive(Debug, Clone)]
pub struct DirectoryTree {
    /// Directory name
    pub name: String,
    /// Location of the directory
    pub location: PathBuf,
    /// Sub-directories, sorted by name
    pub directories: Vec<DirectoryTree>,
    /// Files directly inside this directory, sorted by name
    pub files: Vec<FileHandle>,
}

impl DirectoryTree {
    /// Count all files in this tree (recursive).
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .directories
                .iter()
                .map(|d| d.file_count())
                .sum::<usize>()
    }

    /// Flatten the tree into display rows, depth first.
    ///
    /// Each directory produces a header row at its depth followed by its
    /// files one level deeper and then its sub-directories.
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        self.collect_rows(0, &mut rows);
        rows
    }

    fn collect_rows(&self, level: usize, rows: &mut Vec<TreeRow>) {
        rows.push(TreeRow {
            level,
            label: format!("[{}]", self.name),
            file: None,
        });
        for file in &self.files {
            rows.push(TreeRow {
                level: level + 1,
                label: file.name(),
                file: Some(file.clone()),
            });
        }
        for dir in &self.directories {
            dir.collect_rows(level + 1, rows);
        }
    }
}

/// One row of a flattened directory tree.
#[derive(Debug, Clone)]
pub struct TreeRow {
    /// Indentation level (root directory is 0)
    pub level: usize,
    /// Text shown for the row
    pub label: String,
    /// The file to open when the row is clicked; `None` for directory headers
    pub file: Option<FileHandle>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Directory Scanning
// ─────────────────────────────────────────────────────────────────────────────

/// Scan a directory recursively and build its tree.
///
/// Failing to list `root` is an error. Sub-directories that cannot be
/// listed appear empty and are logged.
pub fn scan_directory(root: &Path) -> Result<DirectoryTree> {
    let name = file_name_of(root);
    let (files, directories) = list_entries(root).map_err(|source| Error::DirectoryList {
        name: name.clone(),
        source,
    })?;

    Ok(DirectoryTree {
        name,
        location: root.to_path_buf(),
        directories: directories.iter().map(|d| scan_child(d)).collect(),
        files,
    })
}

fn scan_child(dir: &Path) -> DirectoryTree {
    match scan_directory(dir) {
        Ok(tree) => tree,
        Err(e) => {
            warn!("{}", e);
            DirectoryTree {
                name: file_name_of(dir),
                location: dir.to_path_buf(),
                directories: Vec::new(),
                files: Vec::new(),
            }
        }
    }
}

/// Split the entries of `dir` into sorted files and directories.
fn list_entries(dir: &Path) -> std::io::Result<(Vec<FileHandle>, Vec<PathBuf>)> {
    let mut files: Vec<(String, FileHandle)> = Vec::new();
    let mut directories: Vec<(String, PathBuf)> = Vec::new();

    for entry in std::fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(_) => continue, // Skip entries with invalid UTF-8 names
        };
        // Does not follow links, so a link back to an ancestor cannot recurse
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                warn!("Could not inspect {}: {}", path.display(), e);
                continue;
            }
        };

        if file_type.is_symlink() {
            debug!("Skipping symbolic link {}", path.display());
        } else if file_type.is_dir() {
            directories.push((name, path));
        } else if file_type.is_file() {
            files.push((name, FileHandle::new(path)));
        } else {
            error!("Unexpected entry in directory: {}", path.display());
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    directories.sort_by(|a, b| a.0.cmp(&b.0));

    Ok((
        files.into_iter().map(|(_, f)| f).collect(),
        directories.into_iter().map(|(_, d)| d).collect(),
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
