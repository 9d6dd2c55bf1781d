//! Error types and handling infrastructure for flowpager.
//!
//! This module provides a centralized error type using `thiserror`. The binary layers
//! `anyhow` context on top of it; the library itself only returns [`PagerError`].
//!
//! Conditions that are part of normal paging (end of input, a token wider than the
//! display, a failed read in the middle of a page) are *not* errors here. They travel as
//! distinguished outcomes through the word, line and page layers instead, so that only
//! the session loop decides what the user sees.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flowpager operations.
#[derive(Error, Debug)]
pub enum PagerError {
    /// File system related errors while opening or inspecting the file
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Permission denied accessing file
    #[error("Permission denied accessing file: {path}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Switching the terminal in or out of raw mode, or reading a key, failed
    #[error("Terminal operation failed: {message}")]
    Terminal {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing rendered output failed
    #[error("Failed to write output")]
    Output {
        #[source]
        source: std::io::Error,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

/// Standard Result type for flowpager operations.
pub type Result<T> = std::result::Result<T, PagerError>;

impl PagerError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Map an io::Error raised while opening `path` to the most specific variant
    pub fn open_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path, source },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::FileError {
                message: format!("Cannot open {}", path.display()),
                source,
            },
        }
    }

    /// Create a Terminal error with a descriptive message
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            message: message.into(),
            source,
        }
    }

    /// Create an Output error from a failed write or flush
    pub fn output(source: std::io::Error) -> Self {
        Self::Output { source }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// True for errors caused by how the program was invoked
    ///
    /// Command-line mistakes are caught by clap before the library runs, so only
    /// configuration errors remain in this class.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}
