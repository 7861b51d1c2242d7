//! Errors raised by the collaborators around the editing core.
//!
//! The core itself never fails: bad positions are clamped or ignored.
//! Only storage, terminal setup and the input channel can fail.

use thiserror::Error;

/// Collaborator-layer error.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file, or talking to the terminal, failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input thread went away.
    #[error("input channel disconnected")]
    InputDisconnected,
}

/// Result alias for collaborator operations.
pub type Result<T> = std::result::Result<T, Error>;
