//! Folder side panel.
//!
//! Shows the open folder as flattened rows: a `[dir]` header per directory,
//! its files one level deeper. Clicking a file opens it.

use crate::files::{DirectoryTree, FileHandle};
use eframe::egui::{self, RichText};

/// Default width of the folder panel.
const DEFAULT_PANEL_WIDTH: f32 = 220.0;

/// Minimum width of the folder panel.
const MIN_PANEL_WIDTH: f32 = 150.0;

/// Maximum width of the folder panel.
const MAX_PANEL_WIDTH: f32 = 500.0;

/// Indentation per tree level.
const INDENT_PER_LEVEL: f32 = 14.0;

/// Output from the folder panel.
#[derive(Debug, Default)]
pub struct FileTreeOutput {
    /// File that was clicked (should be opened in an editor)
    pub file_clicked: Option<FileHandle>,

    /// Whether close button was clicked
    pub close_requested: bool,
}

/// Folder side panel.
#[derive(Debug, Default)]
pub struct FileTreePanel;

impl FileTreePanel {
    pub fn new() -> Self {
        Self
    }

    /// Render the panel and return any output.
    pub fn show(&mut self, ctx: &egui::Context, tree: &DirectoryTree) -> FileTreeOutput {
        let mut output = FileTreeOutput::default();

        egui::SidePanel::left("file_tree_panel")
            .resizable(true)
            .default_width(DEFAULT_PANEL_WIDTH)
            .width_range(MIN_PANEL_WIDTH..=MAX_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.strong(&tree.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("×").on_hover_text("Close folder").clicked() {
                            output.close_requested = true;
                        }
                    });
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for row in tree.rows() {
                            ui.horizontal(|ui| {
                                ui.add_space(row.level as f32 * INDENT_PER_LEVEL);
                                match row.file {
                                    Some(handle) => {
                                        let response = ui
                                            .selectable_label(false, &row.label)
                                            .on_hover_text(handle.location().display().to_string());
                                        if response.clicked() {
                                            output.file_clicked = Some(handle);
                                        }
                                    }
                                    None => {
                                        ui.label(RichText::new(&row.label).weak());
                                    }
                                }
                            });
                        }
                    });
            });

        output
    }
}
