//! File storage backends.
//!
//! `FileStorage` is everything the editor session needs from the file
//! system: pickers, reads, writes, and the comparison used to detect that a
//! freshly picked file is already open under another handle.
//! `NativeStorage` implements it with native dialogs and `std::fs`.

use super::dialogs::{open_folder_dialog, open_multiple_files_dialog, save_file_dialog};
use super::handle::{FileHandle, FileSnapshot};
use super::tree::{scan_directory, DirectoryTree};
use crate::error::{Error, Result};
use log::{debug, info};
use std::fs;

/// Name and text of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContents {
    pub name: String,
    pub text: String,
}

/// File storage collaborator used by the editor session.
///
/// Dismissed pickers report `Error::Cancelled`.
pub trait FileStorage {
    /// Let the user pick one or more files.
    fn pick_files(&self) -> Result<Vec<FileHandle>>;

    /// Let the user pick a directory and list it recursively.
    fn pick_directory(&self) -> Result<DirectoryTree>;

    /// Let the user choose where to save a new file.
    fn pick_save_target(&self, suggested_name: &str) -> Result<FileHandle>;

    /// Look up the current metadata of the file behind `handle`.
    fn snapshot(&self, handle: &FileHandle) -> Result<FileSnapshot>;

    /// Read the full text of a file.
    fn read_text(&self, snapshot: &FileSnapshot) -> Result<String>;

    /// Replace the contents of the file behind `handle`.
    fn write(&self, handle: &FileHandle, text: &str) -> Result<FileHandle>;

    /// Read the name and text of the file behind `handle`.
    fn read(&self, handle: &FileHandle) -> Result<FileContents> {
        let snapshot = self.snapshot(handle)?;
        let text = self.read_text(&snapshot)?;
        Ok(FileContents {
            name: snapshot.name,
            text,
        })
    }

    /// Ask for a save target and write `text` to it.
    fn create_new(&self, suggested_name: &str, text: &str) -> Result<FileHandle> {
        let handle = self.pick_save_target(suggested_name)?;
        self.write(&handle, text)
    }

    /// Whether two snapshots describe the same document.
    ///
    /// Name, size, modification time and media type must match before the
    /// contents are read and compared.
    fn compare(&self, a: &FileSnapshot, b: &FileSnapshot) -> Result<bool> {
        if !a.metadata_matches(b) {
            return Ok(false);
        }
        debug!("Comparing content of {} and {}", a.name, b.name);
        Ok(self.read_text(a)? == self.read_text(b)?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Native Storage
// ─────────────────────────────────────────────────────────────────────────────

/// Storage on the local file system with native dialogs.
#[derive(Debug, Default)]
pub struct NativeStorage;

impl NativeStorage {
    pub fn new() -> Self {
        Self
    }
}

impl FileStorage for NativeStorage {
    fn pick_files(&self) -> Result<Vec<FileHandle>> {
        let paths = open_multiple_files_dialog();
        if paths.is_empty() {
            debug!("File dialog cancelled");
            return Err(Error::Cancelled);
        }
        Ok(paths.into_iter().map(FileHandle::new).collect())
    }

    fn pick_directory(&self) -> Result<DirectoryTree> {
        let root = open_folder_dialog().ok_or(Error::Cancelled)?;
        info!("Listing directory: {}", root.display());
        scan_directory(&root)
    }

    fn pick_save_target(&self, suggested_name: &str) -> Result<FileHandle> {
        save_file_dialog(suggested_name)
            .map(FileHandle::new)
            .ok_or(Error::Cancelled)
    }

    fn snapshot(&self, handle: &FileHandle) -> Result<FileSnapshot> {
        let metadata = fs::metadata(handle.location()).map_err(|e| Error::FileRead {
            name: handle.name(),
            source: e,
        })?;
        let modified = metadata.modified().map_err(|e| Error::FileRead {
            name: handle.name(),
            source: e,
        })?;
        Ok(FileSnapshot::new(
            handle.clone(),
            handle.name(),
            metadata.len(),
            modified,
        ))
    }

    fn read_text(&self, snapshot: &FileSnapshot) -> Result<String> {
        fs::read_to_string(snapshot.handle.location()).map_err(|e| Error::FileRead {
            name: snapshot.name.clone(),
            source: e,
        })
    }

    fn write(&self, handle: &FileHandle, text: &str) -> Result<FileHandle> {
        fs::write(handle.location(), text).map_err(|e| Error::FileWrite {
            name: handle.name(),
            source: e,
        })?;
        info!("Saved file: {}", handle.location().display());
        Ok(handle.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
