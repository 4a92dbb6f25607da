//! Transient status messages shown in the status bar.
//!
//! Every message is also written to the log at the matching level.

use log::{error, info, warn};
use std::time::{Duration, Instant};

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// How long a message of this severity stays visible.
    pub fn duration(&self) -> Duration {
        match self {
            Severity::Error | Severity::Warning => Duration::from_secs(10),
            Severity::Info => Duration::from_secs(3),
        }
    }
}

/// A message waiting to expire.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub severity: Severity,
    pub text: String,
    pub expires_at: Instant,
}

/// User-visible log of recent messages.
#[derive(Debug, Default)]
pub struct StatusLog {
    messages: Vec<StatusMessage>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, text: impl Into<String>) {
        let text = text.into();
        error!("{}", text);
        self.push(Severity::Error, text);
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        let text = text.into();
        warn!("{}", text);
        self.push(Severity::Warning, text);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!("{}", text);
        self.push(Severity::Info, text);
    }

    fn push(&mut self, severity: Severity, text: String) {
        self.messages.push(StatusMessage {
            severity,
            text,
            expires_at: Instant::now() + severity.duration(),
        });
    }

    /// Messages that have not been expired yet, oldest first.
    pub fn messages(&self) -> &[StatusMessage] {
        &self.messages
    }

    /// Drop messages whose time is up.
    pub fn expire(&mut self, now: Instant) {
        self.messages.retain(|m| m.expires_at > now);
    }

    /// Text of the most recent message with the given severity.
    pub fn last(&self, severity: Severity) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.severity == severity)
            .map(|m| m.text.as_str())
    }
}
