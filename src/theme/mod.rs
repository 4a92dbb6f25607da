//! Colors for Slate
//!
//! Each editing surface is drawn with the palette of the mode it was created
//! in, independent of the window's own visuals. The window follows the
//! system color scheme, which `ColorSchemeWatcher` tracks.

mod watcher;

pub use watcher::{ColorSchemeWatcher, SchemeChange};

use eframe::egui::{Color32, Stroke, Visuals};

// ─────────────────────────────────────────────────────────────────────────────
// Editor Palette
// ─────────────────────────────────────────────────────────────────────────────

/// Colors of an editing surface and its chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorPalette {
    pub background: Color32,
    pub text: Color32,
    pub selection: Color32,
    pub cursor: Color32,
    pub border: Color32,
    /// Status bar colors by severity
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
}

impl EditorPalette {
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(30, 30, 30),
            selection: Color32::from_rgb(200, 220, 255),
            cursor: Color32::from_rgb(0, 102, 204),
            border: Color32::from_rgb(200, 200, 200),
            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(180, 120, 0),
            info: Color32::from_rgb(40, 120, 60),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(30, 30, 30),
            text: Color32::from_rgb(220, 220, 220),
            selection: Color32::from_rgb(38, 79, 120),
            cursor: Color32::from_rgb(100, 180, 255),
            border: Color32::from_rgb(60, 60, 60),
            error: Color32::from_rgb(255, 100, 100),
            warning: Color32::from_rgb(230, 180, 80),
            info: Color32::from_rgb(120, 200, 140),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// egui visuals for widgets drawn inside an editing surface.
    pub fn to_visuals(&self, dark_mode: bool) -> Visuals {
        let mut visuals = if dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        visuals.extreme_bg_color = self.background;
        visuals.override_text_color = Some(self.text);
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.cursor);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals
    }
}
