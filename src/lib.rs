//! # Kilo
//!
//! The editing core of a minimal terminal text editor.
//!
//! Kilo keeps a document as a list of byte rows, tracks a cursor and a
//! scrolling viewport over it, and composes each screen as a single
//! escape-sequence frame.
//!
//! ## Core Concepts
//!
//! - **Rows with render forms**: every row keeps a tab-expanded copy that is
//!   rebuilt on each mutation
//! - **Forgiving positions**: out-of-range rows and columns are clamped or
//!   ignored, never fatal
//! - **Minimal scrolling**: the viewport moves only as far as the cursor needs
//! - **Whole frames**: a frame is built in one append-only buffer and written
//!   in one piece
//!
//! ## Example
//!
//! ```rust
//! use kilo::{Editor, KeyEvent};
//!
//! let mut editor = Editor::default();
//! for byte in b"hello" {
//!     editor.process_key(KeyEvent::Char(*byte));
//! }
//! editor.process_key(KeyEvent::Enter);
//!
//! assert_eq!(editor.serialize(), b"hello\n\n");
//! let frame = editor.refresh_screen();
//! assert!(frame.starts_with(b"\x1b[?25l"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod config;
pub mod editor;
pub mod error;
pub mod storage;
pub mod terminal;
pub mod view;

// Re-exports for convenience
pub use actor::{FrameSink, InputActor, InputEvent, KeyEvent, KeySource, Session, TerminalGuard};
pub use buffer::{Buffer, Row};
pub use config::EditorConfig;
pub use editor::{Editor, KeyOutcome, StatusMessage};
pub use error::{Error, Result};
pub use storage::{FileStorage, Storage};
pub use terminal::{compose, Frame, OutputBuffer};
pub use view::{Cursor, Motion, Page, Viewport};
