//! Input subsystem: terminal mode control and keyboard commands.

pub mod raw;
pub mod service;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::input` rather than reaching into submodules.
pub use raw::{
    emergency_restore, install_panic_hook, CrosstermModes, ModeControl, RawModeGuard,
    TerminalMode,
};
pub use service::{command_for_key, KeySource, PagerCommand, TerminalKeys};
