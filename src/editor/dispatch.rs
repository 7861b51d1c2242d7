//! Key dispatch: routes each key event to a cursor move or an edit.
//!
//! Keys that need I/O (save, quit) are not handled here; they come back
//! to the session as a [`KeyOutcome`].

use super::Editor;
use crate::actor::KeyEvent;
use crate::view::{Motion, Page};

/// Ctrl-Q presses needed to abandon unsaved changes.
pub const QUIT_TIMES: usize = 3;

/// What the session should do after a key has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// Keep editing.
    Continue,
    /// Persist the buffer.
    Save,
    /// End the session.
    Quit,
}

impl Editor {
    /// Apply one key event.
    pub fn process_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let outcome = match key {
            KeyEvent::Idle => return KeyOutcome::Continue,
            KeyEvent::Control(b'q') => return self.request_quit(),
            KeyEvent::Control(b's') | KeyEvent::Escape => KeyOutcome::Save,
            KeyEvent::Control(_) => KeyOutcome::Continue,
            KeyEvent::Enter => {
                self.insert_newline();
                KeyOutcome::Continue
            }
            KeyEvent::Backspace => {
                self.delete_char();
                KeyOutcome::Continue
            }
            KeyEvent::Delete => {
                self.delete_forward();
                KeyOutcome::Continue
            }
            KeyEvent::Home => {
                self.home();
                KeyOutcome::Continue
            }
            KeyEvent::End => {
                self.end();
                KeyOutcome::Continue
            }
            KeyEvent::PageUp => {
                self.page(Page::Up);
                KeyOutcome::Continue
            }
            KeyEvent::PageDown => {
                self.page(Page::Down);
                KeyOutcome::Continue
            }
            KeyEvent::Up => {
                self.move_cursor(Motion::Up);
                KeyOutcome::Continue
            }
            KeyEvent::Down => {
                self.move_cursor(Motion::Down);
                KeyOutcome::Continue
            }
            KeyEvent::Left => {
                self.move_cursor(Motion::Left);
                KeyOutcome::Continue
            }
            KeyEvent::Right => {
                self.move_cursor(Motion::Right);
                KeyOutcome::Continue
            }
            KeyEvent::Char(byte) => {
                self.insert_char(byte);
                KeyOutcome::Continue
            }
        };
        self.quit_times = QUIT_TIMES;
        outcome
    }

    /// Quit, unless the buffer is dirty and the user has not yet insisted.
    fn request_quit(&mut self) -> KeyOutcome {
        if self.buffer.is_dirty() && self.quit_times > 0 {
            self.set_status(format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                self.quit_times
            ));
            self.quit_times -= 1;
            return KeyOutcome::Continue;
        }
        KeyOutcome::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(editor: &mut Editor, text: &str) {
        for byte in text.bytes() {
            editor.process_key(KeyEvent::Char(byte));
        }
    }

    #[test]
    fn test_idle_is_noop() {
        let mut editor = Editor::default();
        let before = editor.clone();
        assert_eq!(editor.process_key(KeyEvent::Idle), KeyOutcome::Continue);
        assert_eq!(editor.buffer(), before.buffer());
        assert_eq!(editor.cursor(), before.cursor());
    }

    #[test]
    fn test_typing_and_editing_keys() {
        let mut editor = Editor::default();
        type_text(&mut editor, "hello");
        editor.process_key(KeyEvent::Enter);
        type_text(&mut editor, "world");
        editor.process_key(KeyEvent::Home);
        editor.process_key(KeyEvent::Backspace);

        assert_eq!(editor.buffer().len(), 1);
        assert_eq!(editor.buffer().row(0).unwrap().raw(), b"helloworld");
        assert_eq!((editor.cursor().row, editor.cursor().col), (0, 5));

        editor.process_key(KeyEvent::Delete);
        assert_eq!(editor.buffer().row(0).unwrap().raw(), b"helloorld");
        editor.process_key(KeyEvent::End);
        assert_eq!(editor.cursor().col, 9);
    }

    #[test]
    fn test_arrow_keys_move_cursor() {
        let mut editor = Editor::default();
        editor.load_lines(["abc", "d"]);
        editor.process_key(KeyEvent::Right);
        editor.process_key(KeyEvent::Right);
        editor.process_key(KeyEvent::Down);
        assert_eq!((editor.cursor().row, editor.cursor().col), (1, 1));
        editor.process_key(KeyEvent::Up);
        editor.process_key(KeyEvent::Left);
        assert_eq!((editor.cursor().row, editor.cursor().col), (0, 0));
    }

    #[test]
    fn test_page_keys() {
        let mut editor = Editor::default();
        editor.load_lines((0..100).map(|i| i.to_string()));
        editor.process_key(KeyEvent::PageDown);
        let rows = editor.viewport().rows();
        assert_eq!(editor.cursor().row, 2 * rows - 1);

        editor.scroll();
        editor.process_key(KeyEvent::PageUp);
        assert_eq!(editor.viewport().row_offset, rows);
        assert_eq!(editor.cursor().row, 0);
    }

    #[test]
    fn test_save_keys() {
        let mut editor = Editor::default();
        assert_eq!(editor.process_key(KeyEvent::Control(b's')), KeyOutcome::Save);
        assert_eq!(editor.process_key(KeyEvent::Escape), KeyOutcome::Save);
        assert_eq!(editor.process_key(KeyEvent::Control(b'x')), KeyOutcome::Continue);
    }

    #[test]
    fn test_quit_clean_buffer() {
        let mut editor = Editor::default();
        assert_eq!(editor.process_key(KeyEvent::Control(b'q')), KeyOutcome::Quit);
    }

    #[test]
    fn test_quit_dirty_buffer_needs_confirmation() {
        let mut editor = Editor::default();
        type_text(&mut editor, "x");

        for remaining in (1..=QUIT_TIMES).rev() {
            assert_eq!(editor.process_key(KeyEvent::Control(b'q')), KeyOutcome::Continue);
            assert!(editor.status().text().contains(&format!("Ctrl-Q {remaining} more")));
        }
        assert_eq!(editor.process_key(KeyEvent::Control(b'q')), KeyOutcome::Quit);
    }

    #[test]
    fn test_other_key_resets_quit_confirmation() {
        let mut editor = Editor::default();
        type_text(&mut editor, "x");
        editor.process_key(KeyEvent::Control(b'q'));
        editor.process_key(KeyEvent::Left);
        editor.process_key(KeyEvent::Control(b'q'));
        assert!(editor.status().text().contains("Ctrl-Q 3 more"));
    }
}
