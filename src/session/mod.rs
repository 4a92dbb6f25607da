//! Multi-document editor session.
//!
//! A `Session` owns the open editors of one window, tracks the active one,
//! and runs open/save/close flows against a `FileStorage` and a `Prompt`.
//! Widgets come from a `WidgetFactory`, so the session runs the same under
//! egui and under the in-memory fakes used by the tests.

mod commands;
mod editor;
mod manager;
#[cfg(test)]
mod testing;
mod widgets;

pub use editor::{Editor, NewFileCounter};
pub use manager::Session;
pub use widgets::{
    ChangeNotifier, EditingWidget, EditorId, Prompt, TabEvent, TabEvents, TabWidget, UnsavedFlag,
    WidgetFactory,
};
