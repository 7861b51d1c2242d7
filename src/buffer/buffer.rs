//! Buffer: The ordered sequence of rows that owns all text.
//!
//! Rows are addressed by index only. Every out-of-range index is either
//! clamped or turns the call into a no-op; nothing here panics on a bad
//! position.

use super::row::{Row, DEFAULT_TAB_STOP};

/// The text of one document, as a list of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Rows, top to bottom.
    rows: Vec<Row>,
    /// Number of content mutations since the last save.
    dirty: usize,
    /// Tab stop handed to every new row.
    tab_stop: usize,
}

impl Buffer {
    /// Create an empty buffer with the given tab stop.
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the buffer has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index.
    #[inline]
    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    /// All rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Raw length of a row, or 0 past the last row.
    #[inline]
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map_or(0, Row::len)
    }

    /// Number of unsaved mutations.
    #[inline]
    pub const fn dirty(&self) -> usize {
        self.dirty
    }

    /// Check if there are unsaved mutations.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// The tab stop new rows are built with.
    #[inline]
    pub const fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Reset the dirty count. Called once the content has been persisted.
    pub const fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    /// Insert a new row built from `text` at index `at`.
    ///
    /// Returns false (and changes nothing) if `at > len`.
    pub fn insert_row(&mut self, at: usize, text: &[u8]) -> bool {
        if at > self.rows.len() {
            return false;
        }
        self.rows.insert(at, Row::new(text, self.tab_stop));
        self.dirty += 1;
        true
    }

    /// Remove the row at `at`. No-op if out of range.
    pub fn delete_row(&mut self, at: usize) -> bool {
        if at >= self.rows.len() {
            return false;
        }
        self.rows.remove(at);
        self.dirty += 1;
        true
    }

    /// Insert a byte into row `row` at column `col`.
    ///
    /// The column is clamped to the row length. No-op if the row does not exist.
    pub fn insert_char(&mut self, row: usize, col: usize, byte: u8) -> bool {
        let Some(target) = self.rows.get_mut(row) else {
            return false;
        };
        target.insert(col, byte);
        self.dirty += 1;
        true
    }

    /// Remove the byte at `col` of row `row`. No-op if either is out of range.
    pub fn delete_char(&mut self, row: usize, col: usize) -> bool {
        let removed = self
            .rows
            .get_mut(row)
            .is_some_and(|target| target.remove(col));
        if removed {
            self.dirty += 1;
        }
        removed
    }

    /// Append `text` to the end of row `row`.
    pub fn append(&mut self, row: usize, text: &[u8]) -> bool {
        let Some(target) = self.rows.get_mut(row) else {
            return false;
        };
        target.append(text);
        self.dirty += 1;
        true
    }

    /// Split row `row` at `col`, moving the tail into a new row below it.
    ///
    /// The column is clamped to the row length.
    pub fn split(&mut self, row: usize, col: usize) -> bool {
        let Some(target) = self.rows.get_mut(row) else {
            return false;
        };
        let tail = target.split_off(col);
        self.insert_row(row + 1, &tail)
    }

    /// Join row `row` onto the end of the row above it and remove it.
    ///
    /// Returns the length the upper row had before the join, which is
    /// where the cursor lands.
    pub fn join_with_previous(&mut self, row: usize) -> Option<usize> {
        if row == 0 || row >= self.rows.len() {
            return None;
        }
        let joined = self.rows.remove(row);
        let upper = &mut self.rows[row - 1];
        let former_len = upper.len();
        upper.append(joined.raw());
        self.dirty += 2;
        Some(former_len)
    }

    /// Flatten the buffer into bytes, each row followed by `terminator`.
    ///
    /// An empty buffer serializes to nothing.
    pub fn serialize(&self, terminator: u8) -> Vec<u8> {
        let total = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.raw());
            out.push(terminator);
        }
        out
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}
