//! Row: A single line of text and its rendered form.
//!
//! The raw bytes are authoritative. The rendered bytes are derived by
//! expanding every tab to the next tab stop, and are rebuilt by every
//! mutating method so the two forms never disagree.

/// Default distance between tab stops, in render columns.
pub const DEFAULT_TAB_STOP: usize = 2;

/// One line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Stored bytes, without a line terminator.
    raw: Vec<u8>,
    /// Display bytes with tabs expanded to spaces.
    render: Vec<u8>,
    /// Tab stop used to build `render`.
    tab_stop: usize,
}

impl Row {
    /// Create a row from raw bytes, using the given tab stop.
    ///
    /// A tab stop of zero is treated as one.
    pub fn new(text: impl Into<Vec<u8>>, tab_stop: usize) -> Self {
        let mut row = Self {
            raw: text.into(),
            render: Vec::new(),
            tab_stop: tab_stop.max(1),
        };
        row.update();
        row
    }

    /// Create an empty row.
    pub fn empty(tab_stop: usize) -> Self {
        Self::new(Vec::new(), tab_stop)
    }

    /// The stored bytes.
    #[inline]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The tab-expanded bytes.
    #[inline]
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Length of the stored bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Check if the row holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Width of the rendered form.
    #[inline]
    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// The tab stop this row renders with.
    #[inline]
    pub const fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Map a raw column to its render column.
    ///
    /// Columns past the end are clamped to the row length.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        let cx = cx.min(self.raw.len());
        self.raw[..cx].iter().fold(0, |rx, &byte| {
            if byte == b'\t' {
                rx + self.tab_stop - (rx % self.tab_stop)
            } else {
                rx + 1
            }
        })
    }

    /// Slice of the rendered form visible in a window of `width` columns
    /// starting at `offset`.
    pub fn render_slice(&self, offset: usize, width: usize) -> &[u8] {
        let start = offset.min(self.render.len());
        let end = start.saturating_add(width).min(self.render.len());
        &self.render[start..end]
    }

    /// Insert a byte at `at`, clamped to the row length.
    pub(crate) fn insert(&mut self, at: usize, byte: u8) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, byte);
        self.update();
    }

    /// Remove the byte at `at`. Returns false if `at` is out of range.
    pub(crate) fn remove(&mut self, at: usize) -> bool {
        if at >= self.raw.len() {
            return false;
        }
        self.raw.remove(at);
        self.update();
        true
    }

    /// Append bytes to the end of the row.
    pub(crate) fn append(&mut self, text: &[u8]) {
        self.raw.extend_from_slice(text);
        self.update();
    }

    /// Cut the row at `at` (clamped), returning the removed tail.
    pub(crate) fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.raw.len());
        let tail = self.raw.split_off(at);
        self.update();
        tail
    }

    /// Rebuild the rendered form from the raw bytes.
    fn update(&mut self) {
        let tabs = bytecount(&self.raw, b'\t');
        self.render.clear();
        self.render
            .reserve(self.raw.len() + tabs * (self.tab_stop - 1));

        for &byte in &self.raw {
            if byte == b'\t' {
                self.render.push(b' ');
                while self.render.len() % self.tab_stop != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(byte);
            }
        }
    }
}

#[inline]
fn bytecount(haystack: &[u8], needle: u8) -> usize {
    haystack.iter().filter(|&&b| b == needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Undo tab expansion by walking both forms together.
    fn unexpand(row: &Row) -> Vec<u8> {
        let mut out = Vec::new();
        let mut rx = 0;
        for &byte in row.raw() {
            if byte == b'\t' {
                let next = rx + row.tab_stop() - (rx % row.tab_stop());
                assert!(row.render()[rx..next].iter().all(|&b| b == b' '));
                out.push(b'\t');
                rx = next;
            } else {
                out.push(row.render()[rx]);
                rx += 1;
            }
        }
        assert_eq!(rx, row.render_len());
        out
    }

    #[test]
    fn test_plain_row_renders_verbatim() {
        let row = Row::new("hello", 4);
        assert_eq!(row.render(), b"hello");
        assert_eq!(row.len(), row.render_len());
    }

    #[test]
    fn test_tab_in_empty_row() {
        let mut row = Row::empty(2);
        row.insert(0, b'\t');
        assert_eq!(row.render(), b"  ");
        assert_eq!(row.cx_to_rx(1), 2);
    }

    #[test]
    fn test_tab_aligns_to_stop() {
        let row = Row::new("a\tb\t\tc", 4);
        assert_eq!(row.render(), b"a   b       c");
        assert_eq!(row.cx_to_rx(0), 0);
        assert_eq!(row.cx_to_rx(1), 1);
        assert_eq!(row.cx_to_rx(2), 4);
        assert_eq!(row.cx_to_rx(4), 8);
        assert_eq!(row.cx_to_rx(5), 12);
        assert_eq!(row.cx_to_rx(100), 13);
    }

    #[test]
    fn test_render_reconstructs_raw() {
        let mut row = Row::new("x\ty", 3);
        row.insert(0, b'\t');
        row.append(b"\tz\t");
        row.remove(2);
        assert!(row.render_len() >= row.len());
        assert_eq!(unexpand(&row), row.raw());
    }

    #[test]
    fn test_zero_tab_stop_is_one() {
        let row = Row::new("\t\t", 0);
        assert_eq!(row.tab_stop(), 1);
        assert_eq!(row.render(), b"  ");
    }

    #[test]
    fn test_insert_clamps_column() {
        let mut row = Row::new("ab", 2);
        row.insert(99, b'c');
        assert_eq!(row.raw(), b"abc");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut row = Row::new("ab", 2);
        assert!(!row.remove(2));
        assert!(row.remove(0));
        assert_eq!(row.raw(), b"b");
        assert_eq!(row.render(), b"b");
    }

    #[test]
    fn test_split_off_rerenders_head() {
        let mut row = Row::new("ab\tcd", 2);
        let tail = row.split_off(3);
        assert_eq!(tail, b"cd");
        assert_eq!(row.render(), b"ab  ");
    }

    #[test]
    fn test_render_slice_clips() {
        let row = Row::new("abcdef", 2);
        assert_eq!(row.render_slice(2, 3), b"cde");
        assert_eq!(row.render_slice(4, 10), b"ef");
        assert_eq!(row.render_slice(10, 3), b"");
    }

    #[derive(Debug, Clone)]
    enum Edit {
        Insert(usize, u8),
        Remove(usize),
        Append(Vec<u8>),
        Split(usize),
    }

    fn text_byte() -> impl Strategy<Value = u8> {
        prop_oneof![Just(b'\t'), Just(b' '), b'a'..=b'z']
    }

    fn edit() -> impl Strategy<Value = Edit> {
        prop_oneof![
            (0usize..40, text_byte()).prop_map(|(at, b)| Edit::Insert(at, b)),
            (0usize..40).prop_map(Edit::Remove),
            prop::collection::vec(text_byte(), 0..8).prop_map(Edit::Append),
            (0usize..40).prop_map(Edit::Split),
        ]
    }

    proptest! {
        #[test]
        fn test_render_tracks_raw_through_edits(
            start in prop::collection::vec(text_byte(), 0..24),
            tab_stop in 1usize..9,
            edits in prop::collection::vec(edit(), 0..24),
        ) {
            let mut row = Row::new(start.clone(), tab_stop);
            let mut model = start;
            for edit in edits {
                match edit {
                    Edit::Insert(at, b) => {
                        row.insert(at, b);
                        model.insert(at.min(model.len()), b);
                    }
                    Edit::Remove(at) => {
                        prop_assert_eq!(row.remove(at), at < model.len());
                        if at < model.len() {
                            model.remove(at);
                        }
                    }
                    Edit::Append(text) => {
                        row.append(&text);
                        model.extend_from_slice(&text);
                    }
                    Edit::Split(at) => {
                        let tail = row.split_off(at);
                        prop_assert_eq!(tail, model.split_off(at.min(model.len())));
                    }
                }
                prop_assert_eq!(row.raw(), &model[..]);
                prop_assert!(row.render_len() >= row.len());
                prop_assert_eq!(unexpand(&row), model.clone());
                prop_assert_eq!(row.cx_to_rx(row.len()), row.render_len());
            }
        }
    }
}
