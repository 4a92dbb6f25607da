//! Tab labels of open editors.

use crate::session::{EditorId, TabEvent, TabEvents, TabWidget, UnsavedFlag};
use eframe::egui::{self, RichText, Ui};

/// Marker shown in front of the title of an editor with unsaved changes.
const UNSAVED_MARKER: &str = "● ";

/// Clickable tab for one editor.
pub struct TabLabel {
    id: EditorId,
    title: String,
    active: bool,
    unsaved: UnsavedFlag,
    events: TabEvents,
    destroyed: bool,
}

impl TabLabel {
    pub fn new(id: EditorId, unsaved: UnsavedFlag, events: TabEvents) -> Self {
        Self {
            id,
            title: String::new(),
            active: false,
            unsaved,
            events,
            destroyed: false,
        }
    }

    /// Text shown on the tab, including the unsaved marker.
    pub fn display_title(&self) -> String {
        if self.unsaved.get() {
            format!("{}{}", UNSAVED_MARKER, self.title)
        } else {
            self.title.clone()
        }
    }

    /// Draw the tab; clicks are queued as tab events.
    pub fn ui(&self, ui: &mut Ui) {
        if self.destroyed {
            return;
        }
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;

            let label = ui
                .selectable_label(self.active, RichText::new(self.display_title()))
                .on_hover_text(&self.title);
            if label.middle_clicked() {
                self.events.push(TabEvent::Close(self.id));
            } else if label.clicked() {
                self.events.push(TabEvent::Activate(self.id));
            }

            if ui
                .small_button("×")
                .on_hover_text("Close")
                .clicked()
            {
                self.events.push(TabEvent::Close(self.id));
            }
        });
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl TabWidget for TabLabel {
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
        self.destroyed = true;
        self.active = false;
    }
}

/// Draw the tabs of all editors in one row.
pub fn show_tab_strip<'a>(ui: &mut Ui, tabs: impl Iterator<Item = &'a TabLabel>) {
    egui::ScrollArea::horizontal()
        .id_source("tab_strip")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for tab in tabs {
                    tab.ui(ui);
                    ui.separator();
                }
            });
        });
}
