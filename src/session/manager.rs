//! The editor session: every open editor, the active one, and the
//! operations the host runs on them.

use super::editor::{Editor, NewFileCounter};
use super::widgets::{EditorId, Prompt, TabEvent, TabEvents, WidgetFactory};
use crate::config::Settings;
use crate::error::Result;
use crate::files::{DirectoryTree, FileHandle, FileStorage};
use crate::notifications::StatusLog;
use log::{debug, error, info, warn};

/// All open editors of one application window.
///
/// Editors are kept in tab order. At most one editor is active and it is
/// always an element of the collection.
pub struct Session<F: WidgetFactory> {
    factory: F,
    storage: Box<dyn FileStorage>,
    pub(super) prompt: Box<dyn Prompt>,
    settings: Settings,
    pub(super) status: StatusLog,
    editors: Vec<Editor<F>>,
    active: Option<EditorId>,
    dark_mode: bool,
    new_files: NewFileCounter,
    next_editor_id: u64,
    tab_events: TabEvents,
    /// Folder listed in the side panel
    pub(super) folder: Option<DirectoryTree>,
    pub(super) tab_hint_shown: bool,
}

impl<F: WidgetFactory> Session<F> {
    pub fn new(
        factory: F,
        storage: Box<dyn FileStorage>,
        prompt: Box<dyn Prompt>,
        settings: Settings,
    ) -> Self {
        Self {
            factory,
            storage,
            prompt,
            settings,
            status: StatusLog::new(),
            editors: Vec::new(),
            active: None,
            dark_mode: false,
            new_files: NewFileCounter::default(),
            next_editor_id: 0,
            tab_events: TabEvents::default(),
            folder: None,
            tab_hint_shown: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Opening
    // ─────────────────────────────────────────────────────────────────────────

    /// Open an editor for `file`, or an untitled one for None.
    ///
    /// A handle that is already open (by identity) activates its editor
    /// instead. Failures are reported to the status log.
    pub fn create_editor(&mut self, file: Option<FileHandle>) -> Option<EditorId> {
        if let Some(handle) = &file {
            let existing = self
                .editors
                .iter()
                .find(|e| e.has_file_handle(handle))
                .map(|e| e.id());
            if let Some(id) = existing {
                debug!("{:?} is already open in editor {}", handle, id);
                self.switch_to(Some(id));
                return Some(id);
            }
        }

        match self.attach_new_editor(file) {
            Ok(id) => Some(id),
            Err(e) => {
                self.status.error(format!("Could not open file: {}", e));
                None
            }
        }
    }

    /// Build and initialize an editor; only a fully loaded editor joins the
    /// collection.
    fn attach_new_editor(&mut self, file: Option<FileHandle>) -> Result<EditorId> {
        let id = EditorId(self.next_editor_id);
        self.next_editor_id += 1;

        let dark_mode = self.settings.force_dark_mode || self.dark_mode;
        let mut editor = Editor::new(id, &self.factory, dark_mode, file, self.tab_events.clone());
        if let Err(e) = editor.initialize(self.storage.as_ref(), &mut self.new_files) {
            editor.close();
            return Err(e);
        }

        info!("Opened editor {} for {}", id, editor.title());
        self.editors.push(editor);
        self.switch_to(Some(id));
        Ok(id)
    }

    /// Make `editors[index]` the active editor.
    pub fn activate_editor(&mut self, index: usize) {
        match self.editors.get(index).map(|e| e.id()) {
            Some(id) => self.switch_to(Some(id)),
            None => self.status.error(format!(
                "Cannot activate editor {}: only {} open",
                index,
                self.editors.len()
            )),
        }
    }

    /// Position of an editor showing the same document as `handle`.
    ///
    /// Documents are the same when metadata and content match, so a file
    /// picked again under a new handle is still found. Editors whose file
    /// can no longer be read are skipped.
    pub fn get_file_index(&self, handle: &FileHandle) -> Result<Option<usize>> {
        let candidate = self.storage.snapshot(handle)?;
        for (index, editor) in self.editors.iter().enumerate() {
            match editor.is_opened_for_file(self.storage.as_ref(), &candidate) {
                Ok(true) => return Ok(Some(index)),
                Ok(false) => {}
                Err(e) => warn!("Skipping editor {} in file lookup: {}", editor.id(), e),
            }
        }
        Ok(None)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Saving
    // ─────────────────────────────────────────────────────────────────────────

    pub fn save_active_editor(&mut self) {
        self.save_active(false);
    }

    pub fn save_as_active_editor(&mut self) {
        self.save_active(true);
    }

    fn save_active(&mut self, pick_target: bool) {
        let Some(index) = self.active_index() else {
            self.status.warn("Not saved.");
            return;
        };

        let editor = &mut self.editors[index];
        let result = if pick_target {
            editor.save_as(self.storage.as_ref(), &mut self.new_files)
        } else {
            editor.save(self.storage.as_ref(), &mut self.new_files)
        };
        match result {
            Ok(()) => self.status.info(format!("File {} saved.", editor.title())),
            Err(e) => self
                .status
                .error(format!("File {} not saved: {}", editor.title(), e)),
        }
    }

    /// Save every editor in tab order. A failing editor does not stop the
    /// others.
    pub fn save_all_editors(&mut self) {
        let mut failures = 0;
        for editor in &mut self.editors {
            if let Err(e) = editor.save(self.storage.as_ref(), &mut self.new_files) {
                failures += 1;
                self.status
                    .error(format!("File {} not saved: {}", editor.title(), e));
            }
        }

        if failures == 0 {
            self.status.info("All files saved.");
        } else {
            self.status.error(format!(
                "{} of {} files not saved.",
                failures,
                self.editors.len()
            ));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Closing
    // ─────────────────────────────────────────────────────────────────────────

    pub fn close_active_editor(&mut self) {
        match self.active {
            Some(id) => self.close_editor(id),
            None => self.status.warn("Not closed."),
        }
    }

    /// Close an editor, offering to save it first when it has unsaved
    /// changes. A failed save keeps the editor open.
    pub fn close_editor(&mut self, id: EditorId) {
        let Some(index) = self.index_of(id) else {
            error!("Editor {} is not part of the session", id);
            return;
        };

        if self.editors[index].is_unsaved() {
            let editor = &mut self.editors[index];
            let question = format!(
                "The {} has unsaved changes. Do you want to save it before closing?",
                editor.title()
            );
            if self.prompt.confirm(&question) {
                if let Err(e) = editor.save(self.storage.as_ref(), &mut self.new_files) {
                    self.status
                        .error(format!("File {} not saved: {}", editor.title(), e));
                    return;
                }
            }
        }

        if self.active == Some(id) {
            let replacement = if self.editors.len() >= 2 {
                let next = if index == 0 { 1 } else { index - 1 };
                Some(self.editors[next].id())
            } else {
                None
            };
            self.switch_to(replacement);
        }

        let editor = self.editors.remove(index);
        editor.close();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_any_editor_unsaved(&self) -> bool {
        self.editors.iter().any(|e| e.is_unsaved())
    }

    /// Set the mode new editors are created in. Open editors keep theirs.
    pub fn set_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
    }

    /// Handle the clicks queued by tab labels since the last call.
    pub fn process_tab_events(&mut self) {
        while let Some(event) = self.tab_events.pop() {
            match event {
                TabEvent::Activate(id) if self.index_of(id).is_some() => {
                    self.switch_to(Some(id))
                }
                TabEvent::Activate(id) => debug!("Ignoring click on closed editor {}", id),
                TabEvent::Close(id) => self.close_editor(id),
            }
        }
    }

    fn switch_to(&mut self, target: Option<EditorId>) {
        if let Some(current) = self.active_index() {
            self.editors[current].hide();
        }
        self.active = target;
        if let Some(index) = self.active_index() {
            self.editors[index].show();
        }
    }

    fn index_of(&self, id: EditorId) -> Option<usize> {
        self.editors.iter().position(|e| e.id() == id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn editors(&self) -> &[Editor<F>] {
        &self.editors
    }

    pub fn editors_mut(&mut self) -> &mut [Editor<F>] {
        &mut self.editors
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.and_then(|id| self.index_of(id))
    }

    pub fn active_editor(&self) -> Option<&Editor<F>> {
        self.active_index().map(|i| &self.editors[i])
    }

    pub fn active_editor_mut(&mut self) -> Option<&mut Editor<F>> {
        self.active_index().map(|i| &mut self.editors[i])
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn status(&self) -> &StatusLog {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusLog {
        &mut self.status
    }

    pub(super) fn storage(&self) -> &dyn FileStorage {
        self.storage.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Severity;
    use crate::session::testing::{session_with, MemoryStorage, ScriptedPrompt};
    use crate::session::TabWidget;

    fn titles<F: WidgetFactory>(session: &Session<F>) -> Vec<String> {
        session
            .editors()
            .iter()
            .map(|e| e.title().to_string())
            .collect()
    }

    fn three_untitled() -> (Session<crate::session::testing::FakeWidgets>, Vec<EditorId>) {
        let mut session = session_with(&MemoryStorage::default(), &ScriptedPrompt::default());
        let ids = (0..3).filter_map(|_| session.create_editor(None)).collect();
        (session, ids)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Opening
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_new_editor_is_appended_and_active() {
        let (session, ids) = three_untitled();
        assert_eq!(ids.len(), 3);
        assert_eq!(titles(&session), ["Untitled-1", "Untitled-2", "Untitled-3"]);
        assert_eq!(session.active_index(), Some(2));

        let visible: Vec<bool> = session
            .editors()
            .iter()
            .map(|e| e.surface().visible)
            .collect();
        assert_eq!(visible, [false, false, true]);
    }

    #[test]
    fn test_same_handle_is_not_opened_twice() {
        let storage = MemoryStorage::default();
        let mut session = session_with(&storage, &ScriptedPrompt::default());
        let handle = storage.add_file("/a.txt", "a");

        let first = session.create_editor(Some(handle.clone()));
        session.create_editor(None);
        let second = session.create_editor(Some(handle.clone()));

        assert_eq!(first, second);
        assert_eq!(session.editors().len(), 2);
        assert_eq!(session.active_index(), Some(0));
    }

    #[test]
    fn test_new_handle_for_same_file_opens_new_editor() {
        let storage = MemoryStorage::default();
        let mut session = session_with(&storage, &ScriptedPrompt::default());
        storage.add_file("/a.txt", "a");

        session.create_editor(Some(FileHandle::new("/a.txt")));
        session.create_editor(Some(FileHandle::new("/a.txt")));
        assert_eq!(session.editors().len(), 2);
    }

    #[test]
    fn test_failed_open_leaves_no_editor() {
        let storage = MemoryStorage::default();
        let widgets = crate::session::testing::FakeWidgets::default();
        let mut session = Session::new(
            widgets.clone(),
            Box::new(storage.clone()),
            Box::new(ScriptedPrompt::default()),
            Settings::default(),
        );
        session.create_editor(None);

        let result = session.create_editor(Some(FileHandle::new("/missing.txt")));

        assert!(result.is_none());
        assert_eq!(session.editors().len(), 1);
        assert_eq!(session.active_index(), Some(0));
        assert_eq!(widgets.destroyed(), ["surface #1", "tab #1"]);
        let message = session.status().last(Severity::Error).unwrap();
        assert!(message.starts_with("Could not open file:"));
    }

    #[test]
    fn test_untitled_numbers_are_not_reused() {
        let mut session = session_with(&MemoryStorage::default(), &ScriptedPrompt::default());
        session.create_editor(None);
        session.close_active_editor();
        session.create_editor(None);
        assert_eq!(titles(&session), ["Untitled-2"]);
    }

    #[test]
    fn test_dark_mode_applies_to_new_editors_only() {
        let mut session = session_with(&MemoryStorage::default(), &ScriptedPrompt::default());
        session.create_editor(None);
        session.set_mode(true);
        session.create_editor(None);

        assert!(session.dark_mode());
        assert!(!session.editors()[0].surface().dark_mode);
        assert!(session.editors()[1].surface().dark_mode);
    }

    #[test]
    fn test_forced_dark_mode() {
        let mut session = session_with(&MemoryStorage::default(), &ScriptedPrompt::default());
        session.settings_mut().force_dark_mode = true;
        session.create_editor(None);
        assert!(session.editors()[0].surface().dark_mode);
    }

    #[test]
    fn test_activate_editor() {
        let (mut session, _) = three_untitled();
        session.activate_editor(0);
        assert_eq!(session.active_index(), Some(0));
        assert!(session.editors()[0].tab().active);
        assert!(!session.editors()[2].tab().active);
        assert!(!session.editors()[2].surface().visible);
    }

    #[test]
    fn test_activate_out_of_range_is_reported() {
        let (mut session, _) = three_untitled();
        session.activate_editor(7);
        assert_eq!(session.active_index(), Some(2));
        assert!(session.status().last(Severity::Error).is_some());
    }

    #[test]
    fn test_get_file_index_finds_same_document_under_new_handle() {
        let storage = MemoryStorage::default();
        let mut session = session_with(&storage, &ScriptedPrompt::default());
        storage.add_file("/one.txt", "1");
        let opened = storage.add_file("/docs/f.txt", "content");
        session.create_editor(Some(FileHandle::new("/one.txt")));
        session.create_editor(Some(opened));

        let again = FileHandle::new("/docs/f.txt");
        assert_eq!(session.get_file_index(&again).unwrap(), Some(1));

        let elsewhere = storage.add_file("/other/f.txt", "content");
        assert_eq!(session.get_file_index(&elsewhere).unwrap(), Some(1));

        let different = storage.add_file("/other/g.txt", "content");
        assert_eq!(session.get_file_index(&different).unwrap(), None);
    }

    #[test]
    fn test_get_file_index_skips_content_on_metadata_mismatch() {
        let storage = MemoryStorage::default();
        let mut session = session_with(&storage, &ScriptedPrompt::default());
        session.create_editor(Some(storage.add_file("/a.txt", "short")));
        session.create_editor(Some(storage.add_file("/b.txt", "short")));
        let reads_after_open = storage.content_reads();

        let longer = storage.add_file("/c.txt", "much longer text");
        assert_eq!(session.get_file_index(&longer).unwrap(), None);
        assert_eq!(storage.content_reads(), reads_after_open);

        let renamed = storage.add_file("/d.txt", "short");
        assert_eq!(session.get_file_index(&renamed).unwrap(), None);
        assert_eq!(storage.content_reads(), reads_after_open);
    }

    #[test]
    fn test_get_file_index_unreadable_candidate_fails() {
        let storage = MemoryStorage::default();
        let session = session_with(&storage, &ScriptedPrompt::default());
        assert!(session
            .get_file_index(&FileHandle::new("/missing.txt"))
            .is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Saving
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_unsaved_after_change_and_cleared_by_save() {
        let storage = MemoryStorage::default();
        let mut session = session_with(&storage, &ScriptedPrompt::default());
        session.create_editor(Some(storage.add_file("/a.txt", "a")));
        assert!(!session.is_any_editor_unsaved());

        session
            .active_editor_mut()
            .unwrap()
            .surface_mut()
            .type_text("b");
        assert!(session.is_any_editor_unsaved());

        session.save_active_editor();
        assert!(!session.is_any_editor_unsaved());
        assert_eq!(storage.text_of("/a.txt").as_deref(), Some("ab"));
        assert_eq!(
            session.status().last(Severity::Info),
            Some("File a.txt saved.")
        );
    }

    #[test]
    fn test_save_without_active_editor_warns() {
        let mut session = session_with(&MemoryStorage::default(), &ScriptedPrompt::default());
        session.save_active_editor();
        session.save_as_active_editor();
        assert_eq!(session.status().messages().len(), 2);
        assert_eq!(session.status().last(Severity::Warning), Some("Not saved."));
    }

    #[test]
    fn test_save_as_renames_tab() {
        let storage = MemoryStorage::default();
        storage.queue_save_target(Some("/b.txt"));
        let mut session = session_with(&storage, &ScriptedPrompt::default());
        session.create_editor(Some(storage.add_file("/a.txt", "a")));

        session.save_as_active_editor();

        assert_eq!(titles(&session), ["b.txt"]);
        assert_eq!(storage.suggested_names(), ["a.txt"]);
        assert_eq!(storage.text_of("/b.txt").as_deref(), Some("a"));
        assert_eq!(
            session.status().last(Severity::Info),
            Some("File b.txt saved.")
        );
    }

    #[test]
    fn test_save_failure_is_reported() {
        let storage = MemoryStorage::default();
        storage.fail_writes("/a.txt");
        let mut session = session_with(&storage, &ScriptedPrompt::default());
        session.create_editor(Some(storage.add_file("/a.txt", "a")));
        session
            .active_editor_mut()
            .unwrap()
            .surface_mut()
            .type_text("!");

        session.save_active_editor();

        assert!(session.is_any_editor_unsaved());
        let message = session.status().last(Severity::Error).unwrap();
        assert!(message.starts_with("File a.txt not saved:"));
    }

    #[test]
    fn test_save_all_continues_past_failure() {
        let storage = MemoryStorage::default();
        storage.fail_writes("/a.txt");
        let mut session = session_with(&storage, &ScriptedPrompt::default());
        session.create_editor(Some(storage.add_file("/a.txt", "a")));
        session.create_editor(Some(storage.add_file("/b.txt", "b")));
        for editor in session.editors_mut() {
            editor.surface_mut().type_text("+");
        }

        session.save_all_editors();

        assert!(session.editors()[0].is_unsaved());
        assert!(!session.editors()[1].is_unsaved());
        assert_eq!(storage.text_of("/b.txt").as_deref(), Some("b+"));
        assert_eq!(session.status().last(Severity::Info), None);
        let errors: Vec<&str> = session
            .status()
            .messages()
            .iter()
            .filter(|m| m.severity == Severity::Error)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("File a.txt not saved:"));
    }

    #[test]
    fn test_save_all_reports_success() {
        let storage = MemoryStorage::default();
        let mut session = session_with(&storage, &ScriptedPrompt::default());
        session.create_editor(Some(storage.add_file("/a.txt", "a")));
        session.create_editor(Some(storage.add_file("/b.txt", "b")));

        session.save_all_editors();

        assert_eq!(
            session.status().last(Severity::Info),
            Some("All files saved.")
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Closing
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_close_active_middle_activates_previous() {
        let (mut session, ids) = three_untitled();
        session.activate_editor(1);
        session.close_active_editor();

        assert_eq!(titles(&session), ["Untitled-1", "Untitled-3"]);
        assert_eq!(session.active_editor().map(|e| e.id()), Some(ids[0]));
        assert!(session.editors()[0].surface().visible);
    }

    #[test]
    fn test_close_active_first_activates_next() {
        let (mut session, ids) = three_untitled();
        session.activate_editor(0);
        session.close_active_editor();

        assert_eq!(session.active_index(), Some(0));
        assert_eq!(session.active_editor().map(|e| e.id()), Some(ids[1]));
    }

    #[test]
    fn test_close_active_last_activates_previous() {
        let (mut session, ids) = three_untitled();
        session.close_active_editor();
        assert_eq!(session.active_editor().map(|e| e.id()), Some(ids[1]));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let (mut session, ids) = three_untitled();
        session.close_editor(ids[0]);
        assert_eq!(session.active_editor().map(|e| e.id()), Some(ids[2]));
        assert_eq!(session.editors().len(), 2);
    }

    #[test]
    fn test_close_sole_editor_leaves_none_active() {
        let mut session = session_with(&MemoryStorage::default(), &ScriptedPrompt::default());
        session.create_editor(None);
        session.close_active_editor();
        assert!(session.editors().is_empty());
        assert!(session.active_editor().is_none());

        session.close_active_editor();
        assert_eq!(session.status().last(Severity::Warning), Some("Not closed."));
    }

    #[test]
    fn test_close_unknown_editor_is_noop() {
        let (mut session, _) = three_untitled();
        session.close_editor(EditorId(99));
        assert_eq!(session.editors().len(), 3);
        assert!(session.status().messages().is_empty());
    }

    #[test]
    fn test_close_unsaved_declined_discards() {
        let storage = MemoryStorage::default();
        let prompt = ScriptedPrompt::default();
        prompt.answer(false);
        let mut session = session_with(&storage, &prompt);
        session.create_editor(Some(storage.add_file("/a.txt", "a")));
        session
            .active_editor_mut()
            .unwrap()
            .surface_mut()
            .type_text("lost");

        session.close_active_editor();

        assert!(session.editors().is_empty());
        assert_eq!(storage.text_of("/a.txt").as_deref(), Some("a"));
        assert_eq!(
            prompt.asked(),
            ["The a.txt has unsaved changes. Do you want to save it before closing?"]
        );
    }

    #[test]
    fn test_close_unsaved_confirmed_saves_first() {
        let storage = MemoryStorage::default();
        let prompt = ScriptedPrompt::default();
        prompt.answer(true);
        let mut session = session_with(&storage, &prompt);
        session.create_editor(Some(storage.add_file("/a.txt", "a")));
        session
            .active_editor_mut()
            .unwrap()
            .surface_mut()
            .type_text("kept");

        session.close_active_editor();

        assert!(session.editors().is_empty());
        assert_eq!(storage.text_of("/a.txt").as_deref(), Some("akept"));
    }

    #[test]
    fn test_close_aborts_when_save_fails() {
        let storage = MemoryStorage::default();
        let prompt = ScriptedPrompt::default();
        prompt.answer(true);
        let mut session = session_with(&storage, &prompt);
        session.create_editor(None);
        session
            .active_editor_mut()
            .unwrap()
            .surface_mut()
            .type_text("draft");

        // No save target queued: the save dialog is cancelled
        session.close_active_editor();

        assert_eq!(session.editors().len(), 1);
        assert!(session.is_any_editor_unsaved());
        assert_eq!(session.active_index(), Some(0));
        assert!(session.status().last(Severity::Error).is_some());
    }

    #[test]
    fn test_saved_editor_closes_without_asking() {
        let prompt = ScriptedPrompt::default();
        let mut session = session_with(&MemoryStorage::default(), &prompt);
        session.create_editor(None);
        session.close_active_editor();
        assert!(prompt.asked().is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tab Events
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_tab_clicks_activate_and_close() {
        let (mut session, ids) = three_untitled();

        session.editors()[0].tab().click();
        session.process_tab_events();
        assert_eq!(session.active_editor().map(|e| e.id()), Some(ids[0]));

        session.editors()[1].tab().middle_click();
        session.process_tab_events();
        assert_eq!(titles(&session), ["Untitled-1", "Untitled-3"]);
        assert_eq!(session.active_editor().map(|e| e.id()), Some(ids[0]));
    }

    #[test]
    fn test_click_after_close_is_ignored() {
        let (mut session, ids) = three_untitled();
        session.editors()[0].tab().click();
        session.close_editor(ids[0]);

        session.process_tab_events();

        assert_eq!(session.editors().len(), 2);
        assert_eq!(session.active_editor().map(|e| e.id()), Some(ids[2]));
    }

    #[test]
    fn test_tab_title_follows_editor() {
        let storage = MemoryStorage::default();
        let mut session = session_with(&storage, &ScriptedPrompt::default());
        session.create_editor(Some(storage.add_file("/x/notes.md", "")));
        assert_eq!(session.editors()[0].tab().title(), "notes.md");
    }
}
