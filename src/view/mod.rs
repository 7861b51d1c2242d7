//! View module: Where the cursor is and which part of the buffer is visible.
//!
//! - [`Cursor`]: logical position and the arrow/page/home/end state machine
//! - [`Viewport`]: row and column offsets with minimal-motion scrolling

mod cursor;
mod viewport;

pub use cursor::{Cursor, Motion, Page};
pub use viewport::Viewport;
