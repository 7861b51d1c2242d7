//! Transient status message shown on the bottom line.

use std::time::{Duration, SystemTime};

/// A message plus the wall-clock time it was set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    set_at: Option<SystemTime>,
}

impl StatusMessage {
    /// Replace the message, stamping it with `at`.
    pub fn set(&mut self, text: impl Into<String>, at: SystemTime) {
        self.text = text.into();
        self.set_at = Some(at);
    }

    /// The current message, expired or not.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The message if it is non-empty and younger than `timeout` at `now`.
    ///
    /// A clock that went backwards counts as a fresh message.
    pub fn visible(&self, now: SystemTime, timeout: Duration) -> Option<&str> {
        let set_at = self.set_at?;
        if self.text.is_empty() {
            return None;
        }
        let age = now.duration_since(set_at).unwrap_or(Duration::ZERO);
        (age < timeout).then_some(self.text.as_str())
    }
}
