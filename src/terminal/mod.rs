//! Terminal output: the draw buffer and the screen composer.

mod compose;
mod output;

pub use compose::{compose, Frame, WELCOME};
pub use output::OutputBuffer;
