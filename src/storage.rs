//! Storage collaborator: where buffer contents come from and go to.

use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Loads lines into the editor and persists its serialized bytes.
pub trait Storage {
    /// Read the document as a list of lines without terminators.
    fn load(&mut self) -> Result<Vec<Vec<u8>>>;

    /// Persist serialized bytes. Returns the number of bytes written.
    fn save(&mut self, bytes: &[u8]) -> Result<usize>;
}

/// A document stored in a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    /// A missing file loads as an empty document.
    fn load(&mut self) -> Result<Vec<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(split_lines(&bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, bytes: &[u8]) -> Result<usize> {
        fs::write(&self.path, bytes)?;
        Ok(bytes.len())
    }
}

/// Split file contents into lines, dropping `\n` and any trailing `\r`.
///
/// A final terminator does not start an extra empty line.
pub fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .map(|line| {
            let end = line.iter().rposition(|&b| b != b'\r').map_or(0, |i| i + 1);
            line[..end].to_vec()
        })
        .collect()
}
