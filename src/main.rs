// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Slate - Main Entry Point
//!
//! A small multi-tab plain text editor. Built with Rust and egui.

mod app;
mod config;
mod error;
mod files;
mod keymap;
mod notifications;
mod session;
mod theme;
mod ui;

use app::SlateApp;
use config::load_config;
use files::FileHandle;
use log::info;

/// Application name constant.
const APP_NAME: &str = "Slate";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    // Files passed by the operating system ("open with") or the shell
    let launch_files: Vec<FileHandle> = std::env::args_os().skip(1).map(FileHandle::new).collect();
    if !launch_files.is_empty() {
        info!("Launched with {} files", launch_files.len());
    }

    // Load settings to get window configuration
    let settings = load_config();
    let window_size = settings.window_size;

    info!(
        "Window configuration: {}x{}, maximized: {}",
        window_size.width, window_size.height, window_size.maximized
    );

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([window_size.width, window_size.height])
        .with_min_inner_size([400.0, 300.0])
        .with_maximized(window_size.maximized);

    // Apply position if saved
    let viewport = if let (Some(x), Some(y)) = (window_size.x, window_size.y) {
        viewport.with_position([x, y])
    } else {
        viewport
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(SlateApp::new(
                &cc.egui_ctx,
                settings,
                launch_files,
            )))
        }),
    )
}
