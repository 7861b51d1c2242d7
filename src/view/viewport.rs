//! Viewport: The visible window into the buffer.
//!
//! Offsets only ever move by the minimum needed to bring the cursor back
//! into view; there is no re-centering.

use super::cursor::Cursor;

/// Top-left corner and size of the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible buffer row.
    pub row_offset: usize,
    /// First visible render column.
    pub col_offset: usize,
    /// Text rows on screen.
    rows: usize,
    /// Text columns on screen.
    cols: usize,
}

impl Viewport {
    /// Create a viewport of `rows` x `cols`, each at least 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    /// Visible text rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Visible text columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Change the screen dimensions. Offsets are corrected on the next
    /// [`follow`](Self::follow).
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
    }

    /// Shift the offsets just enough that the cursor's
    /// `(row, render_col)` is visible.
    ///
    /// `cursor.render_col` must already be in sync with `cursor.col`.
    pub fn follow(&mut self, cursor: &Cursor) {
        self.row_offset = scroll_axis(self.row_offset, cursor.row, self.rows);
        self.col_offset = scroll_axis(self.col_offset, cursor.render_col, self.cols);
    }

    /// Cursor position relative to the window's top-left corner.
    pub const fn relative(&self, cursor: &Cursor) -> (usize, usize) {
        (
            cursor.row.saturating_sub(self.row_offset),
            cursor.render_col.saturating_sub(self.col_offset),
        )
    }
}

/// Minimal-motion scroll along one axis.
const fn scroll_axis(offset: usize, position: usize, extent: usize) -> usize {
    if position < offset {
        position
    } else if position >= offset + extent {
        position + 1 - extent
    } else {
        offset
    }
}
