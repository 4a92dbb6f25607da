//! One open document: a tab label, an editing surface, and an optional file.

use super::widgets::{EditingWidget, EditorId, TabEvents, TabWidget, UnsavedFlag, WidgetFactory};
use crate::error::Result;
use crate::files::{FileHandle, FileSnapshot, FileStorage};
use log::{debug, warn};

/// Hands out `Untitled-N` titles. Numbers are never reused.
#[derive(Debug)]
pub struct NewFileCounter {
    next: u32,
}

impl Default for NewFileCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl NewFileCounter {
    pub fn next_title(&mut self) -> String {
        let title = format!("Untitled-{}", self.next);
        self.next += 1;
        title
    }
}

/// An open document.
pub struct Editor<F: WidgetFactory> {
    id: EditorId,
    /// None until the document is saved for the first time
    file: Option<FileHandle>,
    tab: F::Tab,
    surface: F::Surface,
    unsaved: UnsavedFlag,
}

impl<F: WidgetFactory> Editor<F> {
    /// Build the widgets of a new, not yet initialized editor.
    pub fn new(
        id: EditorId,
        factory: &F,
        dark_mode: bool,
        file: Option<FileHandle>,
        events: TabEvents,
    ) -> Self {
        let unsaved = UnsavedFlag::new();
        let mut tab = factory.create_tab(id, unsaved.clone(), events);
        let mut surface = factory.create_surface(id, dark_mode, unsaved.notifier());
        tab.mark_active(false);
        surface.hide();
        Self {
            id,
            file,
            tab,
            surface,
            unsaved,
        }
    }

    /// Load the title and text into the widgets.
    ///
    /// Documents without a file get an empty `Untitled-N`; otherwise the
    /// file is read from `storage`.
    pub fn initialize(
        &mut self,
        storage: &dyn FileStorage,
        new_files: &mut NewFileCounter,
    ) -> Result<()> {
        let (name, text) = match &self.file {
            None => (new_files.next_title(), String::new()),
            Some(handle) => {
                let contents = storage.read(handle)?;
                (contents.name, contents.text)
            }
        };

        self.tab.set_title(&name);
        self.surface.load(&name, &text)?;
        debug!("Editor {} initialized as {}", self.id, name);
        Ok(())
    }

    /// Whether this editor shows the file described by `candidate`,
    /// comparing metadata and content on disk.
    pub fn is_opened_for_file(
        &self,
        storage: &dyn FileStorage,
        candidate: &FileSnapshot,
    ) -> Result<bool> {
        match &self.file {
            None => Ok(false),
            Some(handle) => {
                let current = storage.snapshot(handle)?;
                storage.compare(&current, candidate)
            }
        }
    }

    /// Whether `handle` is the very handle this editor was opened with.
    pub fn has_file_handle(&self, handle: &FileHandle) -> bool {
        self.file
            .as_ref()
            .is_some_and(|own| FileHandle::same(own, handle))
    }

    /// Write the content to the file, asking for a target first if there is none.
    pub fn save(&mut self, storage: &dyn FileStorage, new_files: &mut NewFileCounter) -> Result<()> {
        match &self.file {
            None => self.save_as(storage, new_files),
            Some(handle) => {
                storage.write(handle, &self.surface.content())?;
                self.unsaved.set(false);
                Ok(())
            }
        }
    }

    /// Write the content to a newly picked file and adopt it.
    pub fn save_as(
        &mut self,
        storage: &dyn FileStorage,
        new_files: &mut NewFileCounter,
    ) -> Result<()> {
        let handle = storage.create_new(self.tab.title(), &self.surface.content())?;
        let name = handle.name();
        self.file = Some(handle);
        self.unsaved.set(false);

        // The text is on disk already; a failed reload only leaves the old text shown
        if let Err(e) = self.initialize(storage, new_files) {
            warn!("Saved {} but could not reload it: {}", name, e);
            self.tab.set_title(&name);
        }
        Ok(())
    }

    pub fn show(&mut self) {
        self.surface.show();
        self.tab.mark_active(true);
    }

    pub fn hide(&mut self) {
        self.surface.hide();
        self.tab.mark_active(false);
    }

    /// Tear down both widgets.
    pub fn close(mut self) {
        self.surface.destroy();
        self.tab.destroy();
        self.file = None;
        debug!("Editor {} closed", self.id);
    }

    pub fn id(&self) -> EditorId {
        self.id
    }

    pub fn title(&self) -> &str {
        self.tab.title()
    }

    pub fn is_unsaved(&self) -> bool {
        self.unsaved.get()
    }

    pub fn tab(&self) -> &F::Tab {
        &self.tab
    }

    pub fn surface(&self) -> &F::Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut F::Surface {
        &mut self.surface
    }
}
