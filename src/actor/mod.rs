//! Actor Model: Input thread and the session loop.
//!
//! The editing core is single-threaded. The only other thread is the
//! input actor, which polls crossterm and forwards events over a
//! crossbeam channel:
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐   frame   ┌──────────┐
//! │ Input Thread │ ─────────────────▶  │   Session    │ ────────▶ │ Terminal │
//! └──────────────┘                     │  (Editor)    │           └──────────┘
//!                                      └──────────────┘
//!                                            │ load / save
//!                                            ▼
//!                                      ┌──────────────┐
//!                                      │   Storage    │
//!                                      └──────────────┘
//! ```

mod messages;
mod input;
mod engine;

pub use messages::{InputEvent, KeyEvent};
pub use input::InputActor;
pub use engine::{FrameSink, KeySource, Session, TerminalGuard, HELP_MESSAGE};
