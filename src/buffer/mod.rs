//! Buffer module: The text model of the editor.
//!
//! This module contains:
//! - [`Row`]: One line of text plus its tab-expanded render form
//! - [`Buffer`]: The ordered rows of a document, with the dirty count

mod row;
#[allow(clippy::module_inception)]
mod buffer;

pub use row::{Row, DEFAULT_TAB_STOP};
pub use buffer::Buffer;
