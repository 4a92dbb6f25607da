//! Settings Panel Component for Slate
//!
//! A window listing every user-editable setting with its help text. Changes
//! apply immediately; the caller persists them.

use crate::config::{SettingEntry, SettingValue, Settings};
use eframe::egui::{self, RichText};

/// Result of showing the settings panel.
#[derive(Debug, Clone, Default)]
pub struct SettingsPanelOutput {
    /// Whether settings were modified.
    pub changed: bool,
    /// Whether the panel should be closed.
    pub close_requested: bool,
    /// A rejected update, ready to show to the user.
    pub error: Option<String>,
}

/// Settings panel state and rendering.
#[derive(Debug, Default)]
pub struct SettingsPanel {
    /// Text being typed into text settings, keyed by setting.
    drafts: Vec<(&'static str, String)>,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the settings window.
    pub fn show(&mut self, ctx: &egui::Context, settings: &mut Settings) -> SettingsPanelOutput {
        let mut output = SettingsPanelOutput::default();
        let mut open = true;

        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .min_width(360.0)
            .show(ctx, |ui| {
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    output.close_requested = true;
                }

                for entry in settings.entries() {
                    if let Some(value) = self.entry_ui(ui, &entry) {
                        match settings.update(entry.key, value) {
                            Ok(()) => output.changed = true,
                            Err(e) => output.error = Some(e.to_string()),
                        }
                    }
                    ui.label(RichText::new(entry.help).small().weak());
                    ui.add_space(8.0);
                }
            });

        if !open {
            output.close_requested = true;
        }
        output
    }

    /// Draw one setting; returns the new value when the user changed it.
    fn entry_ui(&mut self, ui: &mut egui::Ui, entry: &SettingEntry) -> Option<SettingValue> {
        match &entry.value {
            SettingValue::Bool(current) => {
                let mut checked = *current;
                ui.checkbox(&mut checked, entry.key)
                    .changed()
                    .then_some(SettingValue::Bool(checked))
            }
            SettingValue::Text(current) => {
                let draft = self.draft(entry.key, current);
                ui.horizontal(|ui| {
                    ui.label(entry.key);
                    let response = ui.text_edit_singleline(draft);
                    response
                        .lost_focus()
                        .then(|| SettingValue::Text(draft.clone()))
                })
                .inner
            }
        }
    }

    fn draft(&mut self, key: &'static str, current: &str) -> &mut String {
        let index = match self.drafts.iter().position(|(k, _)| *k == key) {
            Some(index) => index,
            None => {
                self.drafts.push((key, current.to_string()));
                self.drafts.len() - 1
            }
        };
        &mut self.drafts[index].1
    }
}
