//! File handles and file snapshots.
//!
//! A `FileHandle` is an opaque capability naming one file. Clones share the
//! same identity; two handles created separately for the same location are
//! distinct handles. A `FileSnapshot` captures the metadata of the file a
//! handle points at, used to tell whether two handles refer to the same
//! document.

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::SystemTime;

// ─────────────────────────────────────────────────────────────────────────────
// File Handle
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque reference to a file granted by a storage backend.
#[derive(Clone)]
pub struct FileHandle {
    location: Rc<PathBuf>,
}

impl FileHandle {
    /// Create a new handle for `location`.
    ///
    /// The returned handle is never `same` as any existing handle, even one
    /// for the same location.
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: Rc::new(location.into()),
        }
    }

    /// Reference identity: true only for clones of the same handle.
    pub fn same(a: &FileHandle, b: &FileHandle) -> bool {
        Rc::ptr_eq(&a.location, &b.location)
    }

    /// Where the storage backend finds this file.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// File name shown to the user.
    pub fn name(&self) -> String {
        file_name_of(&self.location)
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FileHandle").field(&self.name()).finish()
    }
}

/// Last path component as a display string.
pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

// ─────────────────────────────────────────────────────────────────────────────
// File Snapshot
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata of a file at the moment it was looked up.
#[derive(Debug, Clone)]
pub struct FileSnapshot {
    /// Handle the snapshot was taken from
    pub handle: FileHandle,
    /// File name (not a path)
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Last modification time
    pub modified: SystemTime,
    /// Media type guessed from the extension, empty when unknown
    pub media_type: &'static str,
}

impl FileSnapshot {
    /// Build a snapshot, guessing the media type from `name`.
    pub fn new(handle: FileHandle, name: String, size: u64, modified: SystemTime) -> Self {
        let media_type = media_type_for(&name);
        Self {
            handle,
            name,
            size,
            modified,
            media_type,
        }
    }

    /// Whether name, size, modification time and media type all match.
    pub fn metadata_matches(&self, other: &FileSnapshot) -> bool {
        self.modified == other.modified
            && self.name == other.name
            && self.size == other.size
            && self.media_type == other.media_type
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Media Types
// ─────────────────────────────────────────────────────────────────────────────

/// Guess a media type from a file name's extension.
///
/// Returns an empty string for unknown extensions.
pub fn media_type_for(name: &str) -> &'static str {
    let ext = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => return "",
    };

    match ext.as_str() {
        "txt" | "text" | "log" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "js" | "mjs" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "toml" => "application/toml",
        "yaml" | "yml" => "application/yaml",
        "sh" => "application/x-sh",
        _ => "",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
