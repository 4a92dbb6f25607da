//! Bottom status bar: transient messages and the active document's language.

use crate::notifications::{Severity, StatusLog};
use crate::theme::EditorPalette;
use eframe::egui::{self, RichText};

/// Draw the status bar.
pub fn show_status_bar(
    ctx: &egui::Context,
    status: &StatusLog,
    language: Option<&str>,
    dark_mode: bool,
) {
    let palette = EditorPalette::for_mode(dark_mode);

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match status.messages().last() {
                Some(message) => {
                    let color = match message.severity {
                        Severity::Error => palette.error,
                        Severity::Warning => palette.warning,
                        Severity::Info => palette.info,
                    };
                    ui.label(RichText::new(&message.text).color(color));
                }
                None => {
                    ui.label("");
                }
            }

            if let Some(language) = language {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(language).weak());
                });
            }
        });
    });
}
