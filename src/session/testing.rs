//! In-memory collaborators for session tests.

use super::manager::Session;
use super::widgets::{
    ChangeNotifier, EditingWidget, EditorId, Prompt, TabEvent, TabEvents, TabWidget, UnsavedFlag,
    WidgetFactory,
};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::files::{DirectoryTree, FileHandle, FileSnapshot, FileStorage};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, SystemTime};

// ─────────────────────────────────────────────────────────────────────────────
// Memory Storage
// ─────────────────────────────────────────────────────────────────────────────

struct MemoryFile {
    text: String,
    modified: SystemTime,
}

#[derive(Default)]
struct MemoryState {
    files: HashMap<PathBuf, MemoryFile>,
    failing_reads: HashSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
    /// None answers a save dialog with a cancel
    save_targets: VecDeque<Option<PathBuf>>,
    suggested_names: Vec<String>,
    picks: VecDeque<Vec<FileHandle>>,
    directory: Option<DirectoryTree>,
    clock: u64,
}

/// File storage backed by a map. Clones share the same files.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<MemoryState>>,
    content_reads: Rc<Cell<usize>>,
}

fn failure(kind: io::ErrorKind) -> io::Error {
    io::Error::new(kind, "scripted failure")
}

impl MemoryStorage {
    /// Store a file and return a fresh handle to it. All files added this
    /// way share one modification time.
    pub fn add_file(&self, path: &str, text: &str) -> FileHandle {
        self.state.borrow_mut().files.insert(
            PathBuf::from(path),
            MemoryFile {
                text: text.to_string(),
                modified: SystemTime::UNIX_EPOCH + Duration::from_secs(1_000),
            },
        );
        FileHandle::new(path)
    }

    pub fn text_of(&self, path: &str) -> Option<String> {
        self.state
            .borrow()
            .files
            .get(Path::new(path))
            .map(|f| f.text.clone())
    }

    pub fn fail_reads(&self, path: &str) {
        self.state.borrow_mut().failing_reads.insert(PathBuf::from(path));
    }

    pub fn fail_writes(&self, path: &str) {
        self.state.borrow_mut().failing_writes.insert(PathBuf::from(path));
    }

    /// Answer the next save dialog with `path`, or cancel it with None.
    pub fn queue_save_target(&self, path: Option<&str>) {
        self.state
            .borrow_mut()
            .save_targets
            .push_back(path.map(PathBuf::from));
    }

    /// Answer the next file picker with these handles.
    pub fn queue_pick(&self, handles: Vec<FileHandle>) {
        self.state.borrow_mut().picks.push_back(handles);
    }

    pub fn set_directory(&self, tree: DirectoryTree) {
        self.state.borrow_mut().directory = Some(tree);
    }

    /// Names suggested to save dialogs so far.
    pub fn suggested_names(&self) -> Vec<String> {
        self.state.borrow().suggested_names.clone()
    }

    /// How many times file contents were read.
    pub fn content_reads(&self) -> usize {
        self.content_reads.get()
    }
}

impl FileStorage for MemoryStorage {
    fn pick_files(&self) -> Result<Vec<FileHandle>> {
        self.state
            .borrow_mut()
            .picks
            .pop_front()
            .ok_or(Error::Cancelled)
    }

    fn pick_directory(&self) -> Result<DirectoryTree> {
        self.state.borrow_mut().directory.take().ok_or(Error::Cancelled)
    }

    fn pick_save_target(&self, suggested_name: &str) -> Result<FileHandle> {
        let mut state = self.state.borrow_mut();
        state.suggested_names.push(suggested_name.to_string());
        match state.save_targets.pop_front() {
            Some(Some(path)) => Ok(FileHandle::new(path)),
            _ => Err(Error::Cancelled),
        }
    }

    fn snapshot(&self, handle: &FileHandle) -> Result<FileSnapshot> {
        let state = self.state.borrow();
        let file = state
            .files
            .get(handle.location())
            .ok_or_else(|| Error::FileRead {
                name: handle.name(),
                source: failure(io::ErrorKind::NotFound),
            })?;
        Ok(FileSnapshot::new(
            handle.clone(),
            handle.name(),
            file.text.len() as u64,
            file.modified,
        ))
    }

    fn read_text(&self, snapshot: &FileSnapshot) -> Result<String> {
        self.content_reads.set(self.content_reads.get() + 1);
        let state = self.state.borrow();
        let location = snapshot.handle.location();
        let read_error = |kind| Error::FileRead {
            name: snapshot.name.clone(),
            source: failure(kind),
        };
        if state.failing_reads.contains(location) {
            return Err(read_error(io::ErrorKind::PermissionDenied));
        }
        state
            .files
            .get(location)
            .map(|f| f.text.clone())
            .ok_or_else(|| read_error(io::ErrorKind::NotFound))
    }

    fn write(&self, handle: &FileHandle, text: &str) -> Result<FileHandle> {
        let mut state = self.state.borrow_mut();
        if state.failing_writes.contains(handle.location()) {
            return Err(Error::FileWrite {
                name: handle.name(),
                source: failure(io::ErrorKind::PermissionDenied),
            });
        }
        state.clock += 1;
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(2_000 + state.clock);
        state.files.insert(
            handle.location().to_path_buf(),
            MemoryFile {
                text: text.to_string(),
                modified,
            },
        );
        Ok(handle.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scripted Prompt
// ─────────────────────────────────────────────────────────────────────────────

/// Answers confirmations from a script; unscripted questions get "no".
#[derive(Clone, Default)]
pub struct ScriptedPrompt {
    answers: Rc<RefCell<VecDeque<bool>>>,
    asked: Rc<RefCell<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn answer(&self, yes: bool) {
        self.answers.borrow_mut().push_back(yes);
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fake Widgets
// ─────────────────────────────────────────────────────────────────────────────

/// Widget factory recording which widgets were destroyed.
#[derive(Clone, Default)]
pub struct FakeWidgets {
    destroyed: Rc<RefCell<Vec<String>>>,
}

impl FakeWidgets {
    pub fn destroyed(&self) -> Vec<String> {
        self.destroyed.borrow().clone()
    }
}

pub struct FakeTab {
    pub id: EditorId,
    pub title: String,
    pub active: bool,
    pub unsaved: UnsavedFlag,
    events: TabEvents,
    destroyed: Rc<RefCell<Vec<String>>>,
}

impl FakeTab {
    pub fn click(&self) {
        self.events.push(TabEvent::Activate(self.id));
    }

    pub fn middle_click(&self) {
        self.events.push(TabEvent::Close(self.id));
    }
}

impl TabWidget for FakeTab {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn mark_active(&mut self, active: bool) {
        self.active = active;
    }

    fn destroy(&mut self) {
        self.destroyed.borrow_mut().push(format!("tab {}", self.id));
    }
}

pub struct FakeSurface {
    pub id: EditorId,
    pub text: String,
    pub filename: String,
    pub visible: bool,
    pub focused: bool,
    pub dark_mode: bool,
    notifier: ChangeNotifier,
    destroyed: Rc<RefCell<Vec<String>>>,
}

impl FakeSurface {
    /// Append text the way a user typing would.
    pub fn type_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.notifier.notify();
    }
}

impl EditingWidget for FakeSurface {
    fn load(&mut self, filename: &str, text: &str) -> Result<()> {
        self.filename = filename.to_string();
        self.text = text.to_string();
        Ok(())
    }

    fn content(&self) -> String {
        self.text.clone()
    }

    fn show(&mut self) {
        self.visible = true;
        self.focused = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.focused = false;
    }

    fn destroy(&mut self) {
        self.destroyed.borrow_mut().push(format!("surface {}", self.id));
    }
}

impl WidgetFactory for FakeWidgets {
    type Tab = FakeTab;
    type Surface = FakeSurface;

    fn create_tab(&self, id: EditorId, unsaved: UnsavedFlag, events: TabEvents) -> FakeTab {
        FakeTab {
            id,
            title: String::new(),
            active: false,
            unsaved,
            events,
            destroyed: Rc::clone(&self.destroyed),
        }
    }

    fn create_surface(&self, id: EditorId, dark_mode: bool, on_change: ChangeNotifier) -> FakeSurface {
        FakeSurface {
            id,
            text: String::new(),
            filename: String::new(),
            visible: false,
            focused: false,
            dark_mode,
            notifier: on_change,
            destroyed: Rc::clone(&self.destroyed),
        }
    }
}

/// Session over the given fakes with default settings.
pub fn session_with(storage: &MemoryStorage, prompt: &ScriptedPrompt) -> Session<FakeWidgets> {
    Session::new(
        FakeWidgets::default(),
        Box::new(storage.clone()),
        Box::new(prompt.clone()),
        Settings::default(),
    )
}
