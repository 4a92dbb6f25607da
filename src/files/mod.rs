//! File operations module for Slate
//!
//! File handles and snapshots, the storage collaborator with its native
//! implementation, directory scanning, and native dialogs.

pub mod dialogs;
mod handle;
mod storage;
mod tree;

pub use handle::{FileHandle, FileSnapshot};
pub use storage::{FileContents, FileStorage, NativeStorage};
pub use tree::{DirectoryTree, TreeRow};
