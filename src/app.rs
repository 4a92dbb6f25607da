//! Main application module for Slate
//!
//! This module implements the eframe App trait: it owns the editor session,
//! draws the menu bar, tab strip, folder panel, editor and status bar, and
//! forwards shortcuts, dropped files and system color scheme changes to the
//! session.

use crate::config::{save_config_silent, Settings, WindowSize};
use crate::files::{FileHandle, NativeStorage};
use crate::keymap::{command_for, Command};
use crate::session::Session;
use crate::theme::{ColorSchemeWatcher, SchemeChange};
use crate::ui::{
    show_status_bar, show_tab_strip, EguiWidgets, FileTreePanel, NativePrompt, SettingsPanel,
    TextAreaOptions,
};
use eframe::egui::{self, RichText};
use log::{debug, info};
use std::time::Instant;

/// Application name shown in the window title.
const APP_NAME: &str = "Slate";

/// The main application struct that holds all state and implements eframe::App.
pub struct SlateApp {
    /// Open editors and everything they need
    session: Session<EguiWidgets>,
    /// Follows the system dark mode between frames
    scheme_watcher: ColorSchemeWatcher,
    /// Folder side panel
    file_tree_panel: FileTreePanel,
    /// Settings window component
    settings_panel: SettingsPanel,
    /// Whether the settings window is open
    show_settings: bool,
    /// Last known window size (for detecting changes)
    last_window_size: Option<egui::Vec2>,
    /// Last known window position (for detecting changes)
    last_window_pos: Option<egui::Pos2>,
}

impl SlateApp {
    /// Create the application and open the files passed on the command line.
    ///
    /// `ctx` already carries the visuals eframe picked from the system
    /// color scheme, which launched editors are created with.
    pub fn new(ctx: &egui::Context, settings: Settings, launch_files: Vec<FileHandle>) -> Self {
        info!("Initializing {}", APP_NAME);

        let mut session = Session::new(
            EguiWidgets,
            Box::new(NativeStorage::new()),
            Box::new(NativePrompt),
            settings,
        );

        // Editors keep the mode they were created with
        let mut scheme_watcher = ColorSchemeWatcher::new();
        if let Some(SchemeChange::Initial(dark_mode)) = scheme_watcher.poll(ctx) {
            session.set_mode(dark_mode);
        }

        if !launch_files.is_empty() {
            session.launch_files(launch_files);
        }

        Self {
            session,
            scheme_watcher,
            file_tree_panel: FileTreePanel::new(),
            settings_panel: SettingsPanel::new(),
            show_settings: false,
            last_window_size: None,
            last_window_pos: None,
        }
    }

    /// Get the window title: "Filename - Slate", or "Slate" without editors.
    fn window_title(&self) -> String {
        match self.session.active_editor() {
            Some(editor) => format!("{} - {}", editor.title(), APP_NAME),
            None => APP_NAME.to_string(),
        }
    }

    /// Pass system color scheme changes on to the session.
    fn track_color_scheme(&mut self, ctx: &egui::Context) {
        match self.scheme_watcher.poll(ctx) {
            Some(SchemeChange::Initial(dark_mode)) => self.session.set_mode(dark_mode),
            Some(SchemeChange::Changed(dark_mode)) => {
                self.session.color_scheme_changed(dark_mode)
            }
            None => {}
        }
    }

    /// Update window size in settings if changed.
    fn update_window_state(&mut self, ctx: &egui::Context) {
        let Some(rect) = ctx.input(|i| i.viewport().outer_rect) else {
            return;
        };
        let current_size = rect.size();
        let current_pos = rect.min;

        let size_changed = self
            .last_window_size
            .map(|s| (s - current_size).length() > 1.0)
            .unwrap_or(true);
        let pos_changed = self
            .last_window_pos
            .map(|p| (p - current_pos).length() > 1.0)
            .unwrap_or(true);
        if !size_changed && !pos_changed {
            return;
        }

        self.last_window_size = Some(current_size);
        self.last_window_pos = Some(current_pos);
        let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
        self.session.settings_mut().window_size = WindowSize {
            width: current_size.x,
            height: current_size.y,
            x: Some(current_pos.x),
            y: Some(current_pos.y),
            maximized,
        };
        debug!(
            "Window state updated: {}x{} at ({}, {}), maximized: {}",
            current_size.x, current_size.y, current_pos.x, current_pos.y, maximized
        );
    }

    /// Files dropped on the window open like a multi-file pick.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<FileHandle> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .filter(|path| path.is_file())
                .map(FileHandle::new)
                .collect()
        });
        if !dropped.is_empty() {
            info!("Opening {} dropped files", dropped.len());
            self.session.open_files(dropped);
        }
    }

    /// Run the commands whose shortcuts were pressed this frame.
    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let commands: Vec<Command> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } => command_for(*modifiers, *key),
                    _ => None,
                })
                .collect()
        });
        for command in commands {
            debug!("Keyboard shortcut: {} ({:?})", command.shortcut(), command);
            self.session.run_command(command);
        }
    }

    /// Render the menu bar; returns the command picked from it.
    fn render_menu_bar(&mut self, ctx: &egui::Context) -> Option<Command> {
        let mut picked = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    for command in Command::ALL {
                        let button =
                            egui::Button::new(command.label()).shortcut_text(command.shortcut());
                        if ui.add(button).clicked() {
                            picked = Some(command);
                            ui.close_menu();
                        }
                    }
                });
                if ui.button("Settings").clicked() {
                    self.show_settings = !self.show_settings;
                }
            });
        });
        picked
    }

    /// Render the main UI content.
    fn render_ui(&mut self, ctx: &egui::Context) {
        if let Some(command) = self.render_menu_bar(ctx) {
            self.session.run_command(command);
        }

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            show_tab_strip(ui, self.session.editors().iter().map(|e| e.tab()));
        });

        show_status_bar(
            ctx,
            self.session.status(),
            self.session.active_editor().map(|e| e.surface().language()),
            ctx.style().visuals.dark_mode,
        );

        if let Some(tree) = self.session.folder() {
            let output = self.file_tree_panel.show(ctx, tree);
            if output.close_requested {
                self.session.close_folder();
            }
            if let Some(handle) = output.file_clicked {
                self.session.create_editor(Some(handle));
            }
        }

        let settings = self.session.settings();
        let options = TextAreaOptions {
            wrap_lines: settings.wrap_lines,
            font_size: settings.font_size,
        };
        let mut plain_tab_pressed = false;
        egui::CentralPanel::default().show(ctx, |ui| match self.session.active_editor_mut() {
            Some(editor) => {
                plain_tab_pressed = editor.surface_mut().ui(ui, options).plain_tab_pressed;
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("Ctrl+N creates a file, Ctrl+O opens one.").weak());
                });
            }
        });
        if plain_tab_pressed {
            self.session.tab_key_pressed();
        }

        if self.show_settings {
            let output = self
                .settings_panel
                .show(ctx, self.session.settings_mut());
            if output.changed {
                save_config_silent(self.session.settings());
            }
            if let Some(message) = output.error {
                self.session.status_mut().error(message);
            }
            if output.close_requested {
                self.show_settings = false;
            }
        }
    }
}

impl eframe::App for SlateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.track_color_scheme(ctx);

        self.session.status_mut().expire(Instant::now());
        if !self.session.status().messages().is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));
        self.update_window_state(ctx);
        self.handle_dropped_files(ctx);

        if ctx.input(|i| i.viewport().close_requested()) && !self.session.confirm_exit() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }

        self.render_ui(ctx);
        self.session.process_tab_events();
        self.handle_keyboard_shortcuts(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        save_config_silent(self.session.settings());
    }
}
