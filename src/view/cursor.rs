//! Cursor: Logical position in the buffer and its movement rules.

use crate::buffer::Buffer;

/// Single-step cursor motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// One byte left, wrapping to the end of the previous row.
    Left,
    /// One byte right, wrapping to the start of the next row.
    Right,
    /// One row up.
    Up,
    /// One row down.
    Down,
}

/// Page-sized jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Towards the top of the buffer.
    Up,
    /// Towards the bottom of the buffer.
    Down,
}

/// Cursor position.
///
/// `row == buffer.len()` is the valid position just past the last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Byte offset into the current row.
    pub col: usize,
    /// Row index.
    pub row: usize,
    /// Column in render space; derived from `col`.
    pub render_col: usize,
}

impl Cursor {
    /// Cursor at `(row, col)` with a stale render column.
    pub const fn at(row: usize, col: usize) -> Self {
        Self {
            col,
            row,
            render_col: 0,
        }
    }

    /// Apply one motion, then clamp the column to the landing row.
    pub fn step(&mut self, motion: Motion, buffer: &Buffer) {
        let current = buffer.row(self.row);
        match motion {
            Motion::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = buffer.row_len(self.row);
                }
            }
            Motion::Right => {
                if let Some(row) = current {
                    if self.col < row.len() {
                        self.col += 1;
                    } else {
                        self.row += 1;
                        self.col = 0;
                    }
                }
            }
            Motion::Up => {
                self.row = self.row.saturating_sub(1);
            }
            Motion::Down => {
                if self.row < buffer.len() {
                    self.row += 1;
                }
            }
        }
        self.clamp(buffer);
    }

    /// Jump to the edge of the visible window, then replay `screen_rows`
    /// single steps so each one re-clamps the column.
    pub fn page(&mut self, page: Page, row_offset: usize, screen_rows: usize, buffer: &Buffer) {
        let motion = match page {
            Page::Up => {
                self.row = row_offset;
                Motion::Up
            }
            Page::Down => {
                self.row = (row_offset + screen_rows)
                    .saturating_sub(1)
                    .min(buffer.len());
                Motion::Down
            }
        };
        self.clamp(buffer);
        for _ in 0..screen_rows {
            self.step(motion, buffer);
        }
    }

    /// Move to the start of the row.
    pub const fn home(&mut self) {
        self.col = 0;
    }

    /// Move to the end of the row. No-op past the last row.
    pub fn end(&mut self, buffer: &Buffer) {
        if let Some(row) = buffer.row(self.row) {
            self.col = row.len();
        }
    }

    /// Pull the cursor back inside the buffer.
    pub fn clamp(&mut self, buffer: &Buffer) {
        self.row = self.row.min(buffer.len());
        self.col = self.col.min(buffer.row_len(self.row));
    }

    /// Recompute `render_col` from `col`.
    pub fn sync_render_col(&mut self, buffer: &Buffer) {
        self.render_col = buffer.row(self.row).map_or(0, |row| row.cx_to_rx(self.col));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_of(lines: &[&str]) -> Buffer {
        let mut buffer = Buffer::new(2);
        for line in lines {
            buffer.insert_row(buffer.len(), line.as_bytes());
        }
        buffer
    }

    #[test]
    fn test_left_at_origin_is_noop() {
        let buffer = buffer_of(&["abc"]);
        let mut cursor = Cursor::default();
        cursor.step(Motion::Left, &buffer);
        assert_eq!((cursor.row, cursor.col), (0, 0));
    }

    #[test]
    fn test_left_wraps_to_previous_row_end() {
        let buffer = buffer_of(&["abc", "de"]);
        let mut cursor = Cursor::at(1, 0);
        cursor.step(Motion::Left, &buffer);
        assert_eq!((cursor.row, cursor.col), (0, 3));
    }

    #[test]
    fn test_right_wraps_and_stops_past_end() {
        let buffer = buffer_of(&["ab"]);
        let mut cursor = Cursor::at(0, 2);
        cursor.step(Motion::Right, &buffer);
        assert_eq!((cursor.row, cursor.col), (1, 0));

        cursor.step(Motion::Right, &buffer);
        assert_eq!((cursor.row, cursor.col), (1, 0));
    }

    #[test]
    fn test_up_at_top_and_down_at_bottom() {
        let buffer = buffer_of(&["a", "b"]);
        let mut cursor = Cursor::at(0, 1);
        cursor.step(Motion::Up, &buffer);
        assert_eq!((cursor.row, cursor.col), (0, 1));

        let mut cursor = Cursor::at(2, 0);
        cursor.step(Motion::Down, &buffer);
        assert_eq!((cursor.row, cursor.col), (2, 0));
    }

    #[test]
    fn test_vertical_moves_clamp_column() {
        let buffer = buffer_of(&["long line here", "", "mid", "longer line again"]);
        let mut cursor = Cursor::at(0, 14);

        let expected = [(1, 0), (2, 0), (3, 0), (4, 0)];
        for (row, col) in expected {
            cursor.step(Motion::Down, &buffer);
            assert_eq!((cursor.row, cursor.col), (row, col));
            assert!(cursor.col <= buffer.row_len(cursor.row));
        }

        let mut cursor = Cursor::at(3, 10);
        cursor.step(Motion::Up, &buffer);
        assert_eq!((cursor.row, cursor.col), (2, 3));
        cursor.step(Motion::Up, &buffer);
        assert_eq!((cursor.row, cursor.col), (1, 0));
    }

    #[test]
    fn test_home_and_end() {
        let buffer = buffer_of(&["abcd"]);
        let mut cursor = Cursor::at(0, 2);
        cursor.end(&buffer);
        assert_eq!(cursor.col, 4);
        cursor.home();
        assert_eq!(cursor.col, 0);

        let mut past = Cursor::at(1, 0);
        past.end(&buffer);
        assert_eq!(past.col, 0);
    }

    #[test]
    fn test_page_down_and_up() {
        let lines: Vec<String> = (0..50).map(|i| "x".repeat(i % 7)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let buffer = buffer_of(&refs);

        let mut cursor = Cursor::at(0, 0);
        cursor.page(Page::Down, 0, 10, &buffer);
        assert_eq!(cursor.row, 19);
        assert!(cursor.col <= buffer.row_len(cursor.row));

        cursor.page(Page::Up, 10, 10, &buffer);
        assert_eq!(cursor.row, 0);
    }

    #[test]
    fn test_page_down_stops_past_last_row() {
        let buffer = buffer_of(&["a", "b", "c"]);
        let mut cursor = Cursor::at(0, 1);
        cursor.page(Page::Down, 0, 10, &buffer);
        assert_eq!((cursor.row, cursor.col), (3, 0));
    }

    #[test]
    fn test_clamp_adversarial_state() {
        let buffer = buffer_of(&["ab"]);
        let mut cursor = Cursor::at(9, 9);
        cursor.clamp(&buffer);
        assert_eq!((cursor.row, cursor.col), (1, 0));

        let mut cursor = Cursor::at(0, 9);
        cursor.step(Motion::Left, &buffer);
        assert_eq!((cursor.row, cursor.col), (0, 2));
    }

    #[test]
    fn test_sync_render_col_expands_tabs() {
        let buffer = buffer_of(&["\tab"]);
        let mut cursor = Cursor::at(0, 1);
        cursor.sync_render_col(&buffer);
        assert_eq!(cursor.render_col, 2);

        let mut past = Cursor::at(1, 0);
        past.sync_render_col(&buffer);
        assert_eq!(past.render_col, 0);
    }
}
