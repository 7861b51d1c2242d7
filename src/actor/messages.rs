//! Message types for actor communication.
//!
//! These enums define the protocol between the input thread and the
//! editing session.

/// Abstract key events consumed by the editor.
///
/// Control keys are distinct variants, so they can never be confused with
/// a printable byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A byte to insert (printable characters and tab).
    Char(u8),
    /// A control chord such as Ctrl-S, carrying the lowercase ASCII letter.
    Control(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Forward delete key.
    Delete,
    /// No event.
    Idle,
}

/// Events from the input thread.
///
/// These are sent from the input actor to the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key(KeyEvent),

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

impl From<KeyEvent> for InputEvent {
    fn from(key: KeyEvent) -> Self {
        Self::Key(key)
    }
}
