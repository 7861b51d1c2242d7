//! Editor configuration.

use crate::buffer::DEFAULT_TAB_STOP;
use std::time::Duration;

/// Lines reserved below the text area (status bar and message line).
pub const RESERVED_LINES: usize = 2;

/// Configuration for the editor and its terminal session.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Distance between tab stops, in render columns.
    pub tab_stop: usize,
    /// Text rows on screen, excluding the status and message lines.
    pub screen_rows: usize,
    /// Text columns on screen.
    pub screen_cols: usize,
    /// How long a status message stays visible.
    pub status_timeout: Duration,
    /// Byte written after every row when serializing.
    pub line_terminator: u8,
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl EditorConfig {
    /// Size the text area for a terminal of `width` x `height` cells.
    #[must_use]
    pub fn with_terminal_size(mut self, width: u16, height: u16) -> Self {
        self.screen_rows = usize::from(height).saturating_sub(RESERVED_LINES);
        self.screen_cols = usize::from(width);
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
            screen_rows: 25 - RESERVED_LINES,
            screen_cols: 80,
            status_timeout: Duration::from_secs(5),
            line_terminator: b'\n',
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: true,
        }
    }
}
