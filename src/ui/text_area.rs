//! Plain-text editing surface.
//!
//! A monospace multiline `TextEdit` drawn with the palette of the mode the
//! surface was created in. Edits made by the user fire the change notifier;
//! loading text does not.

use crate::error::Result;
use crate::keymap::is_plain_tab;
use crate::session::{ChangeNotifier, EditingWidget, EditorId};
use crate::theme::EditorPalette;
use eframe::egui::{self, FontId, Ui};
use std::path::Path;

/// Rendering options taken from the settings each frame.
#[derive(Debug, Clone, Copy)]
pub struct TextAreaOptions {
    pub wrap_lines: bool,
    pub font_size: f32,
}

/// Output from drawing a text area.
#[derive(Debug, Default)]
pub struct TextAreaOutput {
    /// Tab was pressed while the editor had focus and got indented
    pub plain_tab_pressed: bool,
}

/// The editing surface of one editor.
pub struct TextArea {
    id: EditorId,
    text: String,
    language: &'static str,
    dark_mode: bool,
    palette: EditorPalette,
    visible: bool,
    wants_focus: bool,
    on_change: ChangeNotifier,
    destroyed: bool,
}

impl TextArea {
    pub fn new(id: EditorId, dark_mode: bool, on_change: ChangeNotifier) -> Self {
        Self {
            id,
            text: String::new(),
            language: language_for(""),
            dark_mode,
            palette: EditorPalette::for_mode(dark_mode),
            visible: false,
            wants_focus: false,
            on_change,
            destroyed: false,
        }
    }

    /// Language label derived from the loaded file name.
    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn is_visible(&self) -> bool {
        self.visible && !self.destroyed
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Draw the surface filling the available space.
    pub fn ui(&mut self, ui: &mut Ui, options: TextAreaOptions) -> TextAreaOutput {
        let mut output = TextAreaOutput::default();
        if !self.is_visible() {
            return output;
        }

        let tab_pressed = ui.input(|i| {
            i.events.iter().any(|event| {
                matches!(
                    event,
                    egui::Event::Key { key, pressed: true, modifiers, .. }
                        if is_plain_tab(*modifiers, *key)
                )
            })
        });

        ui.scope(|ui| {
            *ui.visuals_mut() = self.palette.to_visuals(self.dark_mode);

            let scroll = if options.wrap_lines {
                egui::ScrollArea::vertical()
            } else {
                egui::ScrollArea::both()
            };
            scroll
                .id_source(("text_area_scroll", self.id))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let width = if options.wrap_lines {
                        ui.available_width()
                    } else {
                        f32::INFINITY
                    };
                    let response = ui.add(
                        egui::TextEdit::multiline(&mut self.text)
                            .id(egui::Id::new(("text_area", self.id)))
                            .code_editor()
                            .font(FontId::monospace(options.font_size))
                            .lock_focus(true)
                            .desired_width(width)
                            .desired_rows(30),
                    );

                    if self.wants_focus {
                        response.request_focus();
                        self.wants_focus = false;
                    }
                    if response.changed() {
                        self.on_change.notify();
                    }
                    if tab_pressed && response.has_focus() {
                        output.plain_tab_pressed = true;
                    }
                });
        });

        output
    }
}

impl EditingWidget for TextArea {
    fn load(&mut self, filename: &str, text: &str) -> Result<()> {
        self.language = language_for(filename);
        self.text = text.to_string();
        Ok(())
    }

    fn content(&self) -> String {
        self.text.clone()
    }

    fn show(&mut self) {
        self.visible = true;
        self.wants_focus = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.wants_focus = false;
    }

    fn destroy(&mut self) {
        self.destroyed = true;
        self.visible = false;
        self.text.clear();
    }
}

/// Display name of the language of a file, from its extension.
pub fn language_for(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("rs") => "Rust",
        Some("md" | "markdown") => "Markdown",
        Some("json") => "JSON",
        Some("toml") => "TOML",
        Some("yaml" | "yml") => "YAML",
        Some("xml") => "XML",
        Some("html" | "htm") => "HTML",
        Some("css") => "CSS",
        Some("js" | "mjs") => "JavaScript",
        Some("ts") => "TypeScript",
        Some("py") => "Python",
        Some("sh" | "bash") => "Shell",
        Some("c" | "h") => "C",
        Some("cpp" | "cc" | "hpp") => "C++",
        Some("go") => "Go",
        Some("java") => "Java",
        Some("sql") => "SQL",
        _ => "Plain Text",
    }
}
