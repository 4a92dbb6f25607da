//! Collaborator seams of the editor session.
//!
//! The session never talks to a GUI toolkit directly. Tab labels and
//! editing surfaces are created through a `WidgetFactory`, user questions go
//! through a `Prompt`, and tab clicks come back as queued `TabEvent`s.

use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Stable identifier of an editor within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorId(pub(crate) u64);

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unsaved State
// ─────────────────────────────────────────────────────────────────────────────

/// Unsaved marker of one editor, shared with its tab label.
#[derive(Debug, Clone, Default)]
pub struct UnsavedFlag(Rc<Cell<bool>>);

impl UnsavedFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub(crate) fn set(&self, unsaved: bool) {
        self.0.set(unsaved);
    }

    /// Notifier for the editing surface; notifying marks the editor unsaved.
    pub fn notifier(&self) -> ChangeNotifier {
        ChangeNotifier(Rc::clone(&self.0))
    }
}

/// Handed to an editing surface to report that its content changed.
#[derive(Debug, Clone)]
pub struct ChangeNotifier(Rc<Cell<bool>>);

impl ChangeNotifier {
    pub fn notify(&self) {
        self.0.set(true);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tab Events
// ─────────────────────────────────────────────────────────────────────────────

/// Something the user did to a tab label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    /// Left click on the label
    Activate(EditorId),
    /// Close button or middle click
    Close(EditorId),
}

/// Queue of tab events, shared between the session and its tab labels.
#[derive(Debug, Clone, Default)]
pub struct TabEvents(Rc<RefCell<VecDeque<TabEvent>>>);

impl TabEvents {
    pub fn push(&self, event: TabEvent) {
        self.0.borrow_mut().push_back(event);
    }

    pub fn pop(&self) -> Option<TabEvent> {
        self.0.borrow_mut().pop_front()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget Traits
// ─────────────────────────────────────────────────────────────────────────────

/// Clickable label representing one open document.
///
/// The label shows the unsaved marker from the `UnsavedFlag` it was created
/// with and reports clicks through its `TabEvents` queue.
pub trait TabWidget {
    fn title(&self) -> &str;
    fn set_title(&mut self, title: &str);
    fn mark_active(&mut self, active: bool);
    fn destroy(&mut self);
}

/// Editable text surface for one document.
pub trait EditingWidget {
    /// Replace the text; `filename` selects the language. Does not count
    /// as a change.
    fn load(&mut self, filename: &str, text: &str) -> Result<()>;
    fn content(&self) -> String;
    /// Make the surface visible and focus it.
    fn show(&mut self);
    fn hide(&mut self);
    fn destroy(&mut self);
}

/// Creates the widgets of new editors.
pub trait WidgetFactory {
    type Tab: TabWidget;
    type Surface: EditingWidget;

    fn create_tab(&self, id: EditorId, unsaved: UnsavedFlag, events: TabEvents) -> Self::Tab;

    fn create_surface(
        &self,
        id: EditorId,
        dark_mode: bool,
        on_change: ChangeNotifier,
    ) -> Self::Surface;
}

/// Asks the user a yes/no question.
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
}
