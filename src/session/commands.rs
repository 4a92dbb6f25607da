//! Commands issued by the host: menu entries, shortcuts, launch requests,
//! and system notifications.

use super::manager::Session;
use super::widgets::WidgetFactory;
use crate::files::{DirectoryTree, FileHandle};
use crate::keymap::Command;
use log::{debug, error, info};

const CONFIRM_REOPEN: &str =
    "The file is (most likely) already opened. Please confirm that you want to open it again.";
const CONFIRM_EXIT: &str = "There are unsaved changes. Are you sure you want to exit?";
const MODE_CHANGED: &str = "Existing editors need to be recreated to use the new mode.";
const TAB_HINT: &str = "Press Esc then Tab to move focus out of the editor instead of indenting.";

impl<F: WidgetFactory> Session<F> {
    /// Run a command bound to a shortcut or menu entry.
    pub fn run_command(&mut self, command: Command) {
        debug!("Running command {:?}", command);
        match command {
            Command::NewFile => self.new_file(),
            Command::OpenFile => self.open_file_dialog(),
            Command::OpenFolder => self.open_directory_dialog(),
            Command::Save => self.save_active_editor(),
            Command::SaveAs => self.save_as_active_editor(),
            Command::SaveAll => self.save_all_editors(),
            Command::Close => self.close_active_editor(),
        }
    }

    pub fn new_file(&mut self) {
        self.create_editor(None);
    }

    pub fn open_file_dialog(&mut self) {
        match self.storage().pick_files() {
            Ok(handles) => self.open_files(handles),
            Err(e) if e.is_cancelled() => debug!("Open cancelled"),
            Err(e) => self.status.error(format!("Could not open file: {}", e)),
        }
    }

    /// Open picked files. A single file that looks already open asks before
    /// opening a second editor for it.
    pub fn open_files(&mut self, handles: Vec<FileHandle>) {
        if handles.len() != 1 {
            for handle in handles {
                self.create_editor(Some(handle));
            }
            return;
        }

        let Some(handle) = handles.into_iter().next() else {
            return;
        };
        match self.get_file_index(&handle) {
            Ok(None) => {
                self.create_editor(Some(handle));
            }
            Ok(Some(index)) => {
                if self.prompt.confirm(CONFIRM_REOPEN) {
                    self.create_editor(Some(handle));
                } else {
                    self.activate_editor(index);
                }
            }
            Err(e) => self.status.error(format!("Could not open file: {}", e)),
        }
    }

    pub fn open_directory_dialog(&mut self) {
        match self.storage().pick_directory() {
            Ok(tree) => {
                info!("Opened folder {} with {} files", tree.name, tree.file_count());
                self.folder = Some(tree);
            }
            Err(e) if e.is_cancelled() => debug!("Open folder cancelled"),
            Err(e) => self.status.error(format!("Could not open folder: {}", e)),
        }
    }

    pub fn folder(&self) -> Option<&DirectoryTree> {
        self.folder.as_ref()
    }

    pub fn close_folder(&mut self) {
        self.folder = None;
    }

    /// Files handed over by the operating system at startup.
    pub fn launch_files(&mut self, handles: Vec<FileHandle>) {
        if handles.is_empty() {
            error!("Launch request without files");
            return;
        }
        self.open_files(handles);
    }

    pub fn color_scheme_changed(&mut self, dark_mode: bool) {
        self.set_mode(dark_mode);
        self.status.warn(MODE_CHANGED);
    }

    /// Whether the window may close. Asks first when there are unsaved changes.
    pub fn confirm_exit(&self) -> bool {
        !self.is_any_editor_unsaved() || self.prompt.confirm(CONFIRM_EXIT)
    }

    /// Called for a plain Tab keypress inside an editor.
    pub fn tab_key_pressed(&mut self) {
        if !self.tab_hint_shown {
            self.tab_hint_shown = true;
            self.status.warn(TAB_HINT);
        }
    }
}
