//! Session: The edit/draw loop that ties the collaborators together.
//!
//! One key event is fully applied before the next frame is composed, and
//! each frame is written in one piece before the next key is read. The
//! session owns the [`Editor`] and talks to the outside world only
//! through three seams:
//!
//! - [`KeySource`]: blocking source of input events
//! - [`FrameSink`]: consumer of whole frames
//! - [`Storage`]: load and save of the document

use super::messages::InputEvent;
use crate::config::RESERVED_LINES;
use crate::editor::{Editor, KeyOutcome};
use crate::error::Result;
use crate::storage::Storage;
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use tracing::{debug, info, trace, warn};

/// Status message shown when a session starts.
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit";

/// Blocking source of input events.
pub trait KeySource {
    /// Wait for the next event.
    fn next_event(&mut self) -> Result<InputEvent>;
}

/// Consumer of composed frames.
pub trait FrameSink {
    /// Write one frame verbatim.
    fn write_frame(&mut self, frame: &[u8]) -> Result<()>;
}

impl<W: Write> FrameSink for W {
    fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.write_all(frame)?;
        self.flush()?;
        Ok(())
    }
}

/// An editing session over injected collaborators.
pub struct Session<K, S, St> {
    /// Editing state.
    editor: Editor,
    /// Input events.
    keys: K,
    /// Frame output.
    sink: S,
    /// Document storage; `None` for an unnamed buffer.
    storage: Option<St>,
}

impl<K, S, St> Session<K, S, St>
where
    K: KeySource,
    S: FrameSink,
    St: Storage,
{
    /// Create a session. The help message is shown on the first frames.
    pub fn new(mut editor: Editor, keys: K, sink: S, storage: Option<St>) -> Self {
        editor.set_status(HELP_MESSAGE);
        Self {
            editor,
            keys,
            sink,
            storage,
        }
    }

    /// The editing state.
    pub const fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Mutable access to the editing state.
    pub const fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// The frame sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// The storage backend, if any.
    pub const fn storage(&self) -> Option<&St> {
        self.storage.as_ref()
    }

    /// End the session, handing back the input source.
    pub fn into_keys(self) -> K {
        self.keys
    }

    /// Load the document from storage into the buffer.
    pub fn open(&mut self) -> Result<()> {
        let Some(storage) = self.storage.as_mut() else {
            return Ok(());
        };
        let lines = storage.load()?;
        info!(lines = lines.len(), "document loaded");
        self.editor.load_lines(lines);
        self.editor.mark_saved();
        Ok(())
    }

    /// Persist the buffer. Failures become a status message.
    pub fn save(&mut self) {
        let Some(storage) = self.storage.as_mut() else {
            self.editor.set_status("No file name; start kilo with a path to save");
            return;
        };
        let bytes = self.editor.serialize();
        match storage.save(&bytes) {
            Ok(written) => {
                info!(written, "document saved");
                self.editor.mark_saved();
                self.editor.set_status(format!("{written} bytes written to disk"));
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                self.editor.set_status(format!("Can't save! {e}"));
            }
        }
    }

    /// Compose the current frame and hand it to the sink.
    pub fn draw(&mut self) -> Result<()> {
        let frame = self.editor.refresh_screen();
        self.sink.write_frame(&frame)
    }

    /// Draw one frame, then read and apply one event.
    ///
    /// Returns `false` once the session should end.
    pub fn step(&mut self) -> Result<bool> {
        self.draw()?;
        match self.keys.next_event()? {
            InputEvent::Key(key) => {
                trace!(?key, "key");
                match self.editor.process_key(key) {
                    KeyOutcome::Continue => {}
                    KeyOutcome::Save => self.save(),
                    KeyOutcome::Quit => {
                        debug!("quit requested");
                        return Ok(false);
                    }
                }
            }
            InputEvent::Resize { width, height } => {
                debug!(width, height, "terminal resized");
                self.editor.resize(
                    usize::from(height).saturating_sub(RESERVED_LINES),
                    usize::from(width),
                );
            }
            InputEvent::Error(message) => {
                warn!(%message, "input error");
            }
            InputEvent::Shutdown => return Ok(false),
        }
        Ok(true)
    }

    /// Run until quit or shutdown.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        Ok(())
    }
}

/// Puts the terminal in raw mode (and optionally the alternate screen)
/// for as long as it lives.
pub struct TerminalGuard {
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Enter raw mode.
    pub fn enter(alternate_screen: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self { alternate_screen };
        if alternate_screen {
            execute!(io::stdout(), EnterAlternateScreen)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}
