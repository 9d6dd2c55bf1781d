//! File session: the open reader plus its one working buffer.
//!
//! A session is the only mutable state of the pager. It is passed by `&mut` through the
//! word, line and page layers, so two sessions over the same file are fully independent.

use crate::error::{PagerError, Result};
use crate::file_handler::buffer::WorkingBuffer;
use crate::file_handler::validation::validate_file_path;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Exclusive owner of a read-only byte source and its working buffer.
#[derive(Debug)]
pub struct FileSession<R = File> {
    reader: R,
    buffer: WorkingBuffer,
    path: Option<PathBuf>,
}

impl FileSession<File> {
    /// Validate and open `path` read-only with a buffer of `capacity` bytes.
    ///
    /// # Errors
    /// * `FileNotFound` / `NotAFile` / `PermissionDenied` for unusable paths
    /// * `FileError` for any other open failure
    pub fn open(path: &Path, capacity: usize) -> Result<Self> {
        validate_file_path(path)?;
        let file = File::open(path).map_err(|e| PagerError::open_error(path, e))?;
        log::debug!(
            "opened {} with a {}-byte working buffer",
            path.display(),
            capacity
        );

        Ok(Self {
            reader: file,
            buffer: WorkingBuffer::with_capacity(capacity),
            path: Some(path.to_path_buf()),
        })
    }
}

impl<R: Read> FileSession<R> {
    /// Wrap an arbitrary reader (pipes, in-memory data, test doubles).
    pub fn from_reader(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buffer: WorkingBuffer::with_capacity(capacity),
            path: None,
        }
    }

    /// Compact `preserve` pending bytes to the buffer front and read more.
    ///
    /// Returns the number of new bytes, `0` at end of file.
    pub fn refill(&mut self, preserve: usize) -> io::Result<usize> {
        self.buffer.refill(&mut self.reader, preserve)
    }

    pub fn buffer(&self) -> &WorkingBuffer {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut WorkingBuffer {
        &mut self.buffer
    }

    /// Path the session was opened from, if it came from the file system
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Give back the underlying reader, dropping the buffer.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
