//! Configuration module for Slate
//!
//! This module handles user preferences and application settings,
//! including serialization/deserialization to/from JSON and
//! persistent storage to platform-specific directories.

mod persistence;
mod settings;

pub use persistence::{load_config, save_config_silent};
pub use settings::{SettingEntry, SettingValue, Settings, WindowSize};
