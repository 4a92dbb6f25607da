//! Keyboard shortcuts.
//!
//! | Shortcut      | Command     |
//! |---------------|-------------|
//! | Ctrl+N        | New file    |
//! | Ctrl+O        | Open file   |
//! | Ctrl+Shift+O  | Open folder |
//! | Ctrl+S        | Save        |
//! | Ctrl+Alt+S    | Save as     |
//! | Ctrl+Shift+S  | Save all    |
//! | Ctrl+W        | Close       |
//!
//! Every chord maps to at most one command.

use eframe::egui::{Key, Modifiers};

/// A session command reachable from the menu and the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewFile,
    OpenFile,
    OpenFolder,
    Save,
    SaveAs,
    SaveAll,
    Close,
}

impl Command {
    /// All commands in menu order.
    pub const ALL: [Command; 7] = [
        Command::NewFile,
        Command::OpenFile,
        Command::OpenFolder,
        Command::Save,
        Command::SaveAs,
        Command::SaveAll,
        Command::Close,
    ];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Command::NewFile => "New",
            Command::OpenFile => "Open…",
            Command::OpenFolder => "Open Folder…",
            Command::Save => "Save",
            Command::SaveAs => "Save As…",
            Command::SaveAll => "Save All",
            Command::Close => "Close",
        }
    }

    /// Shortcut text shown next to the menu label.
    pub fn shortcut(&self) -> &'static str {
        match self {
            Command::NewFile => "Ctrl+N",
            Command::OpenFile => "Ctrl+O",
            Command::OpenFolder => "Ctrl+Shift+O",
            Command::Save => "Ctrl+S",
            Command::SaveAs => "Ctrl+Alt+S",
            Command::SaveAll => "Ctrl+Shift+S",
            Command::Close => "Ctrl+W",
        }
    }
}

/// Resolve a key press to its command.
///
/// Ctrl must be held; Shift and Alt must match the binding exactly.
pub fn command_for(modifiers: Modifiers, key: Key) -> Option<Command> {
    if !modifiers.ctrl {
        return None;
    }
    match (modifiers.shift, modifiers.alt, key) {
        (false, false, Key::N) => Some(Command::NewFile),
        (false, false, Key::O) => Some(Command::OpenFile),
        (true, false, Key::O) => Some(Command::OpenFolder),
        (false, false, Key::S) => Some(Command::Save),
        (false, true, Key::S) => Some(Command::SaveAs),
        (true, false, Key::S) => Some(Command::SaveAll),
        (false, false, Key::W) => Some(Command::Close),
        _ => None,
    }
}

/// Tab without modifiers, which the editor consumes as indentation.
pub fn is_plain_tab(modifiers: Modifiers, key: Key) -> bool {
    key == Key::Tab && modifiers.is_none()
}
