//! Application orchestration layer
//!
//! Runs the session loop: render the first page, then wait for one key at a time and
//! either advance a page or quit. The loop owns the file session, the key source and the
//! output stream; the terminal mode is held by a guard around the loop.

use crate::config::PagerConfig;
use crate::error::{PagerError, Result};
use crate::file_handler::FileSession;
use crate::input::{command_for_key, KeySource, ModeControl, PagerCommand, RawModeGuard};
use crate::render::{render_page, PageStatus};
use std::io::{Read, Write};

/// Why a session loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user asked to quit
    Quit,
    /// The key source closed
    InputClosed,
    /// Reading the file failed; the error marker was shown
    ReadFailed,
}

/// Pager session loop over a file session, a key source and an output stream.
pub struct Application<R, K, W> {
    session: FileSession<R>,
    keys: K,
    out: W,
    config: PagerConfig,
    pages_rendered: usize,
}

impl<R: Read, K: KeySource, W: Write> Application<R, K, W> {
    /// Wire the components together, checking that the geometry fits the session buffer.
    pub fn new(session: FileSession<R>, keys: K, out: W, config: PagerConfig) -> Result<Self> {
        config.validate()?;
        if session.buffer().capacity() <= config.line_width {
            return Err(PagerError::config(format!(
                "a {}-byte buffer cannot hold a {}-byte line",
                session.buffer().capacity(),
                config.line_width
            )));
        }

        Ok(Self {
            session,
            keys,
            out,
            config,
            pages_rendered: 0,
        })
    }

    /// Run the session loop with the terminal held in raw mode.
    ///
    /// The terminal is back in cooked mode when this returns, whatever the outcome.
    pub fn run_in_raw_mode<C: ModeControl>(&mut self, control: C) -> Result<SessionEnd> {
        let _raw = RawModeGuard::with_control(control)?;
        self.run()
    }

    /// Run the session loop. The first page is rendered without waiting for a key.
    pub fn run(&mut self) -> Result<SessionEnd> {
        if let Some(end) = self.show_page()? {
            return Ok(end);
        }

        loop {
            let Some(key) = self.keys.next_key()? else {
                log::debug!("key input closed");
                return Ok(SessionEnd::InputClosed);
            };

            match command_for_key(key) {
                Some(PagerCommand::NextPage) => {
                    if let Some(end) = self.show_page()? {
                        return Ok(end);
                    }
                }
                Some(PagerCommand::Quit) => return Ok(SessionEnd::Quit),
                None => log::trace!("ignoring key {:?}", key.code),
            }
        }
    }

    /// Number of pages rendered so far, including EOF-only pages
    pub fn pages_rendered(&self) -> usize {
        self.pages_rendered
    }

    /// Tear the application apart, e.g. to inspect what was written.
    pub fn into_parts(self) -> (FileSession<R>, K, W) {
        (self.session, self.keys, self.out)
    }

    /// Render and flush one page. Returns the session end if the page forces one.
    fn show_page(&mut self) -> Result<Option<SessionEnd>> {
        let summary = render_page(&mut self.session, &self.config, &mut self.out)?;
        self.out.flush().map_err(PagerError::output)?;
        self.pages_rendered += 1;

        Ok(match summary.status {
            PageStatus::ReadFailed(_) => Some(SessionEnd::ReadFailed),
            PageStatus::Full | PageStatus::EndOfInput => None,
        })
    }
}
