//! UI components for Slate
//!
//! This module contains the egui widgets behind the editor session and the
//! window's panels.

mod factory;
mod file_tree;
mod settings;
mod status_bar;
mod tab_strip;
mod text_area;

pub use factory::{EguiWidgets, NativePrompt};
pub use file_tree::FileTreePanel;
pub use settings::SettingsPanel;
pub use status_bar::show_status_bar;
pub use tab_strip::{show_tab_strip, TabLabel};
pub use text_area::{TextArea, TextAreaOptions};
