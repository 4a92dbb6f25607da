//! Widget factory and prompt backed by egui and native dialogs.

use super::tab_strip::TabLabel;
use super::text_area::TextArea;
use crate::files::dialogs::confirm_dialog;
use crate::session::{ChangeNotifier, EditorId, Prompt, TabEvents, UnsavedFlag, WidgetFactory};

/// Title of confirmation dialogs.
const PROMPT_TITLE: &str = "Slate";

/// Creates egui tab labels and text areas.
#[derive(Debug, Default)]
pub struct EguiWidgets;

impl WidgetFactory for EguiWidgets {
    type Tab = TabLabel;
    type Surface = TextArea;

    fn create_tab(&self, id: EditorId, unsaved: UnsavedFlag, events: TabEvents) -> TabLabel {
        TabLabel::new(id, unsaved, events)
    }

    fn create_surface(&self, id: EditorId, dark_mode: bool, on_change: ChangeNotifier) -> TextArea {
        TextArea::new(id, dark_mode, on_change)
    }
}

/// Asks through a native yes/no message box.
#[derive(Debug, Default)]
pub struct NativePrompt;

impl Prompt for NativePrompt {
    fn confirm(&self, message: &str) -> bool {
        confirm_dialog(PROMPT_TITLE, message)
    }
}
