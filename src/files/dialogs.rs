//! Native dialog integration using the rfd crate
//!
//! This module provides functions to open native file pickers for opening
//! and saving files, a folder picker, and yes/no confirmation boxes.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

/// Opens a native file dialog for selecting one or more files.
///
/// Returns an empty vector if the dialog was cancelled.
pub fn open_multiple_files_dialog() -> Vec<PathBuf> {
    FileDialog::new()
        .set_title("Open Files")
        .add_filter("All Files", &["*"])
        .pick_files()
        .unwrap_or_default()
}

/// Opens a native folder picker dialog.
///
/// Returns `None` if cancelled.
pub fn open_folder_dialog() -> Option<PathBuf> {
    FileDialog::new().set_title("Open Folder").pick_folder()
}

/// Opens a native save dialog seeded with `default_name`.
///
/// Returns `None` if cancelled.
pub fn save_file_dialog(default_name: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save File")
        .set_file_name(default_name)
        .save_file()
}

/// Shows a yes/no question and returns `true` if the user answered yes.
pub fn confirm_dialog(title: &str, message: &str) -> bool {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::YesNo)
        .show();

    matches!(result, MessageDialogResult::Yes)
}
