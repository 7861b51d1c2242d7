//! Editor: The single owned state object for one editing session.
//!
//! Holds the [`Buffer`], [`Cursor`], [`Viewport`] and status line, and
//! implements the character and line edits that key events map to.
//! Nothing here performs I/O; loading and saving go through the
//! storage collaborator driven by the session.

mod dispatch;
mod status;

pub use dispatch::{KeyOutcome, QUIT_TIMES};
pub use status::StatusMessage;

use crate::buffer::Buffer;
use crate::config::EditorConfig;
use crate::terminal::{compose, Frame};
use crate::view::{Cursor, Motion, Page, Viewport};
use std::time::SystemTime;

/// Editing state: text, cursor, visible window and status line.
#[derive(Debug, Clone)]
pub struct Editor {
    /// All text.
    buffer: Buffer,
    /// Logical cursor.
    cursor: Cursor,
    /// Visible window.
    viewport: Viewport,
    /// Bottom-line message.
    status: StatusMessage,
    /// Name shown in the status bar.
    filename: Option<String>,
    /// Configuration.
    config: EditorConfig,
    /// Remaining Ctrl-Q presses before a dirty buffer is abandoned.
    quit_times: usize,
}

impl Editor {
    /// Create an empty editor.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            buffer: Buffer::new(config.tab_stop),
            cursor: Cursor::default(),
            viewport: Viewport::new(config.screen_rows, config.screen_cols),
            status: StatusMessage::default(),
            filename: None,
            config,
            quit_times: QUIT_TIMES,
        }
    }

    /// The text buffer.
    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// The cursor.
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The viewport.
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The configuration.
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The status message.
    pub const fn status(&self) -> &StatusMessage {
        &self.status
    }

    /// Name shown in the status bar.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Set the name shown in the status bar.
    pub fn set_filename(&mut self, name: impl Into<String>) {
        self.filename = Some(name.into());
    }

    /// Set the status message, stamped with the current time.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.set_status_at(text, SystemTime::now());
    }

    /// Set the status message with an explicit timestamp.
    pub fn set_status_at(&mut self, text: impl Into<String>, at: SystemTime) {
        self.status.set(text, at);
    }

    /// Place the cursor, clamped into the buffer.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = Cursor::at(row, col);
        self.cursor.clamp(&self.buffer);
    }

    /// Append loaded lines to the end of the buffer.
    pub fn load_lines<I, L>(&mut self, lines: I)
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        for line in lines {
            self.buffer.insert_row(self.buffer.len(), line.as_ref());
        }
    }

    /// Record that the buffer content has been persisted.
    pub const fn mark_saved(&mut self) {
        self.buffer.mark_clean();
    }

    /// Serialize the buffer with the configured line terminator.
    pub fn serialize(&self) -> Vec<u8> {
        self.buffer.serialize(self.config.line_terminator)
    }

    /// Change the text area size.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.config.screen_rows = rows;
        self.config.screen_cols = cols;
        self.viewport.resize(rows, cols);
    }

    /// Insert a byte at the cursor and advance past it.
    ///
    /// Past the last row, an empty row is created first.
    pub fn insert_char(&mut self, byte: u8) {
        self.cursor.clamp(&self.buffer);
        if self.cursor.row == self.buffer.len() {
            self.buffer.insert_row(self.buffer.len(), b"");
        }
        self.buffer.insert_char(self.cursor.row, self.cursor.col, byte);
        self.cursor.col += 1;
    }

    /// Break the line at the cursor and move to the start of the new line.
    pub fn insert_newline(&mut self) {
        self.cursor.clamp(&self.buffer);
        if self.cursor.col == 0 {
            self.buffer.insert_row(self.cursor.row, b"");
        } else {
            self.buffer.split(self.cursor.row, self.cursor.col);
        }
        self.cursor.row += 1;
        self.cursor.col = 0;
    }

    /// Delete the byte before the cursor, joining lines at column 0.
    pub fn delete_char(&mut self) {
        self.cursor.clamp(&self.buffer);
        let Cursor { row, col, .. } = self.cursor;
        if row == self.buffer.len() || (row == 0 && col == 0) {
            return;
        }
        if col > 0 {
            self.buffer.delete_char(row, col - 1);
            self.cursor.col -= 1;
        } else if let Some(joined_at) = self.buffer.join_with_previous(row) {
            self.cursor.row -= 1;
            self.cursor.col = joined_at;
        }
    }

    /// Delete the byte under the cursor: step right, then backspace.
    ///
    /// At the end of the last row the step lands on the line past the end,
    /// where backspace has nothing to delete.
    pub fn delete_forward(&mut self) {
        self.cursor.step(Motion::Right, &self.buffer);
        self.delete_char();
    }

    /// Move the cursor one step.
    pub fn move_cursor(&mut self, motion: Motion) {
        self.cursor.step(motion, &self.buffer);
    }

    /// Move the cursor a page up or down.
    pub fn page(&mut self, page: Page) {
        self.cursor
            .page(page, self.viewport.row_offset, self.viewport.rows(), &self.buffer);
    }

    /// Move to the start of the row.
    pub const fn home(&mut self) {
        self.cursor.home();
    }

    /// Move to the end of the row.
    pub fn end(&mut self) {
        self.cursor.end(&self.buffer);
    }

    /// Recompute the render column and scroll the viewport to the cursor.
    pub fn scroll(&mut self) {
        self.cursor.clamp(&self.buffer);
        self.cursor.sync_render_col(&self.buffer);
        self.viewport.follow(&self.cursor);
    }

    /// Scroll, then compose the next frame as of `now`.
    pub fn render_frame(&mut self, now: SystemTime) -> Vec<u8> {
        self.scroll();
        compose(&self.frame(), now)
    }

    /// Scroll, then compose the next frame as of the current time.
    pub fn refresh_screen(&mut self) -> Vec<u8> {
        self.render_frame(SystemTime::now())
    }

    /// Borrow everything the composer reads.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            buffer: &self.buffer,
            cursor: &self.cursor,
            viewport: &self.viewport,
            filename: self.filename.as_deref(),
            status: &self.status,
            status_timeout: self.config.status_timeout,
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
