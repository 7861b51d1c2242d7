//! Screen composer: turns editor state into one frame of terminal output.
//!
//! Frame layout, top to bottom:
//!
//! ```text
//! ESC[?25l ESC[H
//! text rows         (viewport.rows() lines, `~` past the end of the buffer)
//! status bar        (inverse video: name, line count, dirty flag | row, col)
//! message line      (status message while younger than the timeout)
//! ESC[?25h ESC[r;cH
//! ```

use super::output::OutputBuffer;
use crate::buffer::Buffer;
use crate::editor::StatusMessage;
use crate::view::{Cursor, Viewport};
use std::time::{Duration, SystemTime};

/// Banner shown in an empty buffer.
pub const WELCOME: &str = concat!("Kilo editor -- version ", env!("CARGO_PKG_VERSION"));

/// Longest file name prefix shown in the status bar.
const STATUS_NAME_MAX: usize = 20;

/// Everything the composer reads to draw a frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Text to draw.
    pub buffer: &'a Buffer,
    /// Cursor, with `render_col` in sync.
    pub cursor: &'a Cursor,
    /// Visible window, already scrolled to the cursor.
    pub viewport: &'a Viewport,
    /// Name for the status bar.
    pub filename: Option<&'a str>,
    /// Message for the bottom line.
    pub status: &'a StatusMessage,
    /// How long the message stays visible.
    pub status_timeout: Duration,
}

/// Compose a complete frame as of `now`.
pub fn compose(frame: &Frame<'_>, now: SystemTime) -> Vec<u8> {
    let rows = frame.viewport.rows();
    let cols = frame.viewport.cols();
    let mut out = OutputBuffer::with_capacity((rows + 2) * (cols + 8) + 32);

    out.cursor_hide();
    out.cursor_home();
    draw_rows(&mut out, frame);
    draw_status_bar(&mut out, frame);
    draw_message_bar(&mut out, frame, now);

    out.cursor_show();
    let (row, col) = frame.viewport.relative(frame.cursor);
    out.cursor_move(row, col);

    out.into_frame()
}

fn draw_rows(out: &mut OutputBuffer, frame: &Frame<'_>) {
    let rows = frame.viewport.rows();
    let cols = frame.viewport.cols();

    for y in 0..rows {
        let file_row = y + frame.viewport.row_offset;
        match frame.buffer.row(file_row) {
            Some(row) => out.write_raw(row.render_slice(frame.viewport.col_offset, cols - 1)),
            None if frame.buffer.is_empty() && y == rows / 3 => draw_welcome(out, cols),
            None => out.write_raw(b"~"),
        }
        out.clear_line();
        out.newline();
    }
}

fn draw_welcome(out: &mut OutputBuffer, cols: usize) {
    let len = WELCOME.len().min(cols);
    let mut padding = (cols - len) / 2;
    if padding > 0 {
        out.write_raw(b"~");
        padding -= 1;
    }
    out.write_repeat(b' ', padding);
    out.write_raw(&WELCOME.as_bytes()[..len]);
}

fn draw_status_bar(out: &mut OutputBuffer, frame: &Frame<'_>) {
    let cols = frame.viewport.cols();
    out.inverse_on();

    let name = frame.filename.map_or(&b"[No Name]"[..], |name| {
        &name.as_bytes()[..name.len().min(STATUS_NAME_MAX)]
    });
    let mut left = name.to_vec();
    let dirty = if frame.buffer.is_dirty() { "(modified)" } else { "" };
    left.extend_from_slice(format!(" - {} lines {dirty}", frame.buffer.len()).as_bytes());
    let right = format!("row {}, col {}", frame.cursor.row + 1, frame.cursor.col + 1);

    let len = left.len().min(cols);
    out.write_raw(&left[..len]);
    let remaining = cols - len;
    if remaining >= right.len() {
        out.write_repeat(b' ', remaining - right.len());
        out.write_str(&right);
    } else {
        out.write_repeat(b' ', remaining);
    }

    out.reset_attrs();
    out.newline();
}

fn draw_message_bar(out: &mut OutputBuffer, frame: &Frame<'_>, now: SystemTime) {
    out.clear_line();
    if let Some(message) = frame.status.visible(now, frame.status_timeout) {
        let bytes = message.as_bytes();
        out.write_raw(&bytes[..bytes.len().min(frame.viewport.cols())]);
    }
}
