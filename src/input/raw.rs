//! Terminal mode control: scoped raw mode with guaranteed restoration.
//!
//! The terminal starts in cooked mode, is switched to raw mode once at startup and must
//! be back in cooked mode on every way out of the process. [`RawModeGuard`] restores it
//! on drop, which covers normal returns, `?` propagation and unwinding. Release builds
//! abort on panic and never run destructors, so [`install_panic_hook`] restores the
//! terminal from the panic hook as well.

use crate::error::{PagerError, Result};
use ratatui::crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Input mode of the controlling terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    /// Line-buffered, echoing input
    Cooked,
    /// Keystrokes delivered immediately and unechoed
    Raw,
}

/// Backend that actually flips the terminal between modes.
///
/// The original device attributes are captured by `enter_raw` and put back by
/// `leave_raw`.
pub trait ModeControl {
    fn enter_raw(&mut self) -> io::Result<()>;
    fn leave_raw(&mut self) -> io::Result<()>;
}

/// crossterm-backed mode control for the process's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermModes;

impl ModeControl for CrosstermModes {
    fn enter_raw(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn leave_raw(&mut self) -> io::Result<()> {
        disable_raw_mode()
    }
}

/// Holds the terminal in raw mode for as long as it lives.
#[derive(Debug)]
pub struct RawModeGuard<C: ModeControl = CrosstermModes> {
    control: C,
    mode: TerminalMode,
}

impl RawModeGuard<CrosstermModes> {
    /// Put the process's terminal into raw mode.
    pub fn enable() -> Result<Self> {
        Self::with_control(CrosstermModes)
    }
}

impl<C: ModeControl> RawModeGuard<C> {
    /// Enter raw mode through `control`. Nothing needs restoring if this fails.
    pub fn with_control(mut control: C) -> Result<Self> {
        control
            .enter_raw()
            .map_err(|e| PagerError::terminal("Failed to enable raw mode", e))?;
        log::debug!("entered raw mode");

        Ok(Self {
            control,
            mode: TerminalMode::Raw,
        })
    }

    pub fn mode(&self) -> TerminalMode {
        self.mode
    }

    /// Return to cooked mode. Only the first call touches the terminal.
    pub fn restore(&mut self) -> Result<()> {
        if self.mode == TerminalMode::Cooked {
            return Ok(());
        }
        // Cooked even on failure: a second attempt would not do better
        self.mode = TerminalMode::Cooked;
        self.control
            .leave_raw()
            .map_err(|e| PagerError::terminal("Failed to restore terminal mode", e))?;
        log::debug!("restored cooked mode");
        Ok(())
    }
}

impl<C: ModeControl> Drop for RawModeGuard<C> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("{}", e);
        }
    }
}

/// Restore cooked mode without a guard, for use where none is reachable.
///
/// Harmless when raw mode was never entered.
pub fn emergency_restore() {
    let _ = disable_raw_mode();
}

/// Chain a panic hook that restores the terminal before the previous hook reports.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        emergency_restore();
        previous(info);
    }));
}
