//! Slate settings.
//!
//! Two settings are user-facing and listed by `entries()`: line wrapping and
//! forced dark mode. Font size and window geometry are persisted alongside
//! them but only change through the window itself.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Window Geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Outer window geometry remembered between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
    /// Left edge, unknown until the window has been shown once
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Top edge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Setting Values
// ─────────────────────────────────────────────────────────────────────────────

/// A user-editable setting value as shown in the settings panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

/// One row of the settings panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingEntry {
    pub key: &'static str,
    pub value: SettingValue,
    pub help: &'static str,
}

/// Key and help text of every user-editable setting, in display order.
const SETTINGS_HELP: &[(&str, &str)] = &[
    ("wrap_lines", "Long lines wrap inside the editor."),
    (
        "force_dark_mode",
        "By default dark mode will be set based on the system color scheme.",
    ),
];

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// Everything stored in `config.json`. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether long lines wrap in the editor
    pub wrap_lines: bool,

    /// Create new editors in dark mode regardless of the system color scheme
    pub force_dark_mode: bool,

    /// Editor font size in points
    pub font_size: f32,

    pub window_size: WindowSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wrap_lines: true,
            force_dark_mode: false,
            font_size: 14.0,
            window_size: WindowSize::default(),
        }
    }
}

impl Settings {
    pub const MIN_FONT_SIZE: f32 = 8.0;
    pub const MAX_FONT_SIZE: f32 = 72.0;
    /// Bounds for both window width and height
    pub const MIN_WINDOW_SIZE: f32 = 200.0;
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;

    /// List the user-editable settings with their current values.
    pub fn entries(&self) -> Vec<SettingEntry> {
        SETTINGS_HELP
            .iter()
            .filter_map(|(key, help)| {
                self.get(key).map(|value| SettingEntry { key, value, help })
            })
            .collect()
    }

    /// Current value of a user-editable setting.
    pub fn get(&self, key: &str) -> Option<SettingValue> {
        match key {
            "wrap_lines" => Some(SettingValue::Bool(self.wrap_lines)),
            "force_dark_mode" => Some(SettingValue::Bool(self.force_dark_mode)),
            _ => None,
        }
    }

    /// Update a user-editable setting.
    ///
    /// Unknown keys and values of the wrong type are rejected and leave
    /// the settings untouched.
    pub fn update(&mut self, key: &str, value: SettingValue) -> Result<()> {
        let slot = match key {
            "wrap_lines" => &mut self.wrap_lines,
            "force_dark_mode" => &mut self.force_dark_mode,
            _ => {
                return Err(Error::UnknownSetting {
                    key: key.to_string(),
                })
            }
        };

        match value {
            SettingValue::Bool(v) => {
                *slot = v;
                Ok(())
            }
            SettingValue::Text(_) => Err(Error::SettingType {
                key: key.to_string(),
                expected: "boolean",
            }),
        }
    }

    /// Clamp numeric values into their allowed ranges.
    pub fn sanitize(&mut self) {
        let window = Self::MIN_WINDOW_SIZE..=Self::MAX_WINDOW_SIZE;
        self.font_size = self.font_size.clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);
        self.window_size.width = self.window_size.width.clamp(*window.start(), *window.end());
        self.window_size.height = self.window_size.height.clamp(*window.start(), *window.end());
    }

    /// Parse settings from JSON and clamp them.
    pub fn from_json_sanitized(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
