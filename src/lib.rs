//! # flowpager - Word-Wrapping Terminal Pager
//!
//! Streams a text file through a fixed-size buffer, re-flows it into fixed-width lines
//! by word-wrapping, and shows it one page at a time under raw keyboard control.
//!
//! ## Architecture
//!
//! Data flows strictly upward through the layers, all driven by one owned
//! [`FileSession`]:
//!
//! - [`file_handler`] - path validation, the working buffer and its refill/compaction
//! - [`render`] - word scanner → line composer → page renderer
//! - [`input`] - scoped raw terminal mode and key commands
//! - [`app`] - the session loop tying keys to pages
//! - [`config`] - page geometry
//! - [`error`] - centralized error types
//!
//! ## Example
//!
//! ```
//! use flowpager::{render_page, FileSession, PagerConfig};
//! use std::io::Cursor;
//!
//! let config = PagerConfig::default().with_page_size(1);
//! let text = Cursor::new(b"hello world\nfoo".to_vec());
//! let mut session = FileSession::from_reader(text, config.buffer_capacity());
//!
//! let mut out = Vec::new();
//! render_page(&mut session, &config, &mut out).unwrap();
//! assert_eq!(out, b"hello world\n");
//! ```

pub mod config;
pub mod error;
pub mod file_handler;

pub mod input;
pub mod render;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{PagerError, Result};

// Public API surface for external usage
pub use app::{Application, SessionEnd};
pub use config::PagerConfig;
pub use file_handler::FileSession;
pub use render::{render_page, PageStatus, PageSummary};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
