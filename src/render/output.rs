//! Output adapter for writing text while the terminal is in raw mode.
//!
//! Raw mode turns off output post-processing as well as input buffering, so a bare `\n`
//! moves the cursor down without returning it to column 0. [`CrlfWriter`] writes every
//! `\n` as `\r\n`, leaving the page renderer free to emit plain newlines.

use memchr::memchr;
use std::io::{self, Write};

/// Writer that expands `\n` to `\r\n`.
#[derive(Debug)]
pub struct CrlfWriter<W> {
    inner: W,
}

impl<W: Write> CrlfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match memchr(b'\n', buf) {
            None => self.inner.write(buf),
            Some(0) => {
                self.inner.write_all(b"\r\n")?;
                Ok(1)
            }
            Some(pos) => self.inner.write(&buf[..pos]),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
