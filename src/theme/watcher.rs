//! Tracks the system color scheme across frames.

use eframe::egui::Context;
use log::info;

/// Result of observing the system color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeChange {
    /// First observation; nothing to warn about
    Initial(bool),
    /// The system switched modes since the last frame
    Changed(bool),
}

/// Remembers the last seen system dark-mode flag.
#[derive(Debug, Default)]
pub struct ColorSchemeWatcher {
    last_system_dark_mode: Option<bool>,
}

impl ColorSchemeWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `dark_mode` and report whether it differs from the last value.
    pub fn observe(&mut self, dark_mode: bool) -> Option<SchemeChange> {
        let previous = self.last_system_dark_mode.replace(dark_mode);
        match previous {
            None => Some(SchemeChange::Initial(dark_mode)),
            Some(old) if old != dark_mode => {
                info!("System color scheme changed, dark mode: {}", dark_mode);
                Some(SchemeChange::Changed(dark_mode))
            }
            Some(_) => None,
        }
    }

    /// Observe the mode eframe derived from the system theme.
    pub fn poll(&mut self, ctx: &Context) -> Option<SchemeChange> {
        self.observe(ctx.style().visuals.dark_mode)
    }
}
