//! `OutputBuffer`: Append-only draw buffer for one frame.
//!
//! The composer appends text and escape sequences here, then hands the
//! whole frame to the sink in one piece so the terminal never shows a
//! half-drawn screen.
//!
//! Escape vocabulary:
//!
//! | Sequence      | Meaning                       |
//! |---------------|-------------------------------|
//! | `ESC[?25l`    | hide cursor                   |
//! | `ESC[?25h`    | show cursor                   |
//! | `ESC[H`       | cursor home                   |
//! | `ESC[r;cH`    | cursor position (1-indexed)   |
//! | `ESC[K`       | clear to end of line          |
//! | `ESC[7m`      | inverse video on              |
//! | `ESC[m`       | attributes off                |

use std::io::Write;

/// Growable byte buffer for building a frame.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write `count` copies of `byte`.
    #[inline]
    pub fn write_repeat(&mut self, byte: u8, count: usize) {
        self.data.resize(self.data.len() + count, byte);
    }

    /// Move cursor to the 0-indexed screen cell `(row, col)`.
    #[inline]
    pub fn cursor_move(&mut self, row: usize, col: usize) {
        // CSI row ; col H; writing into a Vec cannot fail
        let _ = write!(self.data, "\x1b[{};{}H", row + 1, col + 1);
    }

    /// Move cursor to the top-left corner.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(b"\x1b[H");
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Clear from the cursor to the end of the line.
    #[inline]
    pub fn clear_line(&mut self) {
        self.data.extend_from_slice(b"\x1b[K");
    }

    /// Start inverse video.
    #[inline]
    pub fn inverse_on(&mut self) {
        self.data.extend_from_slice(b"\x1b[7m");
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[m");
    }

    /// Carriage return and line feed.
    #[inline]
    pub fn newline(&mut self) {
        self.data.extend_from_slice(b"\r\n");
    }

    /// Finish the frame, trimming spare capacity.
    pub fn into_frame(mut self) -> Vec<u8> {
        self.data.shrink_to_fit();
        self.data
    }
}
