//! Key input: where keystrokes come from and what they mean to the pager.
//!
//! The pager understands two commands, `f` (next page) and `q` (quit). Raw mode also
//! stops Ctrl+C from raising SIGINT, so it is mapped to quit as well. Every other key is
//! ignored.

use crate::error::{PagerError, Result};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

/// Commands the session loop acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerCommand {
    NextPage,
    Quit,
}

/// Translate a key event into a pager command, `None` for keys the pager ignores.
pub fn command_for_key(key: KeyEvent) -> Option<PagerCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(PagerCommand::Quit),
        (_, modifiers) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (KeyCode::Char('f'), _) => Some(PagerCommand::NextPage),
        (KeyCode::Char('q'), _) => Some(PagerCommand::Quit),
        _ => None,
    }
}

/// A blocking source of keystrokes.
pub trait KeySource {
    /// Wait for the next key. `Ok(None)` means the input has closed.
    fn next_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Keys read from the controlling terminal through crossterm.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => return Ok(Some(key)),
                // Resize, focus and paste events carry no pager command
                Ok(_) => continue,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(PagerError::terminal("Failed to read key", e)),
            }
        }
    }
}
