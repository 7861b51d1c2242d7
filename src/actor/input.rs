//! Input Actor: Dedicated thread for polling terminal events.
//!
//! This actor runs in its own thread and uses crossterm's event polling
//! to capture keyboard and resize events. The session reads them back
//! one at a time through [`KeySource`], so the editing core itself stays
//! single-threaded.

use super::engine::KeySource;
use super::messages::{InputEvent, KeyEvent};
use crate::error::Error;
use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Events produced by the input thread.
    events: Receiver<InputEvent>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// checking the shutdown flag.
    pub fn spawn(poll_timeout: Duration) -> io::Result<Self> {
        let (sender, events) = bounded::<InputEvent>(64);
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("kilo-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
            events,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Signal shutdown and wait for the input thread to finish.
    ///
    /// Pending events are drained meanwhile so the thread never blocks on
    /// a full channel.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            while !handle.is_finished() {
                let _ = self.events.recv_timeout(Duration::from_millis(10));
            }
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(input_event) = convert_event(event) {
                            if sender.send(input_event).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                }
            }
        }
    }
}

impl KeySource for InputActor {
    fn next_event(&mut self) -> Result<InputEvent, Error> {
        self.events.recv().map_err(|_| Error::InputDisconnected)
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Convert a crossterm event to our `InputEvent`.
pub(crate) fn convert_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => {
            // Only process key press events (not release or repeat)
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            convert_key(key_event.code, key_event.modifiers).map(InputEvent::Key)
        }
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

/// Convert a crossterm key press to our `KeyEvent`.
///
/// Non-ASCII characters are dropped; the buffer renders one cell per byte.
fn convert_key(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyEvent> {
    Some(match code {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => {
            KeyEvent::Control(u8::try_from(c.to_ascii_lowercase()).ok()?)
        }
        KeyCode::Char(c) if c.is_ascii() => KeyEvent::Char(u8::try_from(c).ok()?),
        KeyCode::Tab => KeyEvent::Char(b'\t'),
        KeyCode::Backspace => KeyEvent::Backspace,
        KeyCode::Enter => KeyEvent::Enter,
        KeyCode::Esc => KeyEvent::Escape,
        KeyCode::Left => KeyEvent::Left,
        KeyCode::Right => KeyEvent::Right,
        KeyCode::Up => KeyEvent::Up,
        KeyCode::Down => KeyEvent::Down,
        KeyCode::Home => KeyEvent::Home,
        KeyCode::End => KeyEvent::End,
        KeyCode::PageUp => KeyEvent::PageUp,
        KeyCode::PageDown => KeyEvent::PageDown,
        KeyCode::Delete => KeyEvent::Delete,
        _ => return None, // Ignore other key codes
    })
}
