//! Fixed-capacity working buffer staging file bytes for the word scanner.
//!
//! The buffer never grows. When the scanner runs off the end of the valid region in the
//! middle of a word, the partially scanned bytes are compacted to the front and the rest
//! of the capacity is refilled from the reader. As long as no word plus one delimiter is
//! larger than the capacity, a word is never cut by an arbitrary read boundary.

use bstr::ByteSlice;
use std::io::{self, Read};

/// Owned byte store with a consumed-prefix cursor and a valid-data end.
///
/// Invariant: `start <= end <= capacity`. Bytes in `start..end` are valid and not yet
/// consumed; bytes before `start` have already been handed out as words.
#[derive(Debug)]
pub struct WorkingBuffer {
    data: Box<[u8]>,
    /// First unconsumed byte
    start: usize,
    /// One past the last valid byte
    end: usize,
}

impl WorkingBuffer {
    /// Create an empty buffer of `capacity` bytes.
    ///
    /// # Panics
    /// Panics if `capacity` is zero; a zero-sized buffer can never make progress.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "working buffer capacity must be non-zero");
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            start: 0,
            end: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Index of the first unconsumed byte
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last valid byte
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of valid, unconsumed bytes
    pub fn available(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The valid, unconsumed bytes
    pub fn unconsumed(&self) -> &[u8] {
        &self.data[self.start..self.end]
    }

    /// Mark `count` bytes as consumed, returning them.
    ///
    /// # Panics
    /// Panics if fewer than `count` bytes are available.
    pub fn consume(&mut self, count: usize) -> &[u8] {
        assert!(
            count <= self.available(),
            "cannot consume {} bytes, only {} available",
            count,
            self.available()
        );
        let from = self.start;
        self.start += count;
        &self.data[from..self.start]
    }

    /// Compact `preserve` unconsumed bytes to the front and read into the free tail.
    ///
    /// Returns the number of newly read bytes; `Ok(0)` means end of file. The preserved
    /// bytes stay valid whether the read succeeds, hits end of file, or fails. Reads
    /// interrupted by a signal are retried.
    ///
    /// # Panics
    /// Panics if `preserve` exceeds the available bytes or fills the whole capacity,
    /// since a full buffer would make every read look like end of file.
    pub fn refill<R: Read>(&mut self, reader: &mut R, preserve: usize) -> io::Result<usize> {
        assert!(
            preserve <= self.available(),
            "cannot preserve {} bytes, only {} available",
            preserve,
            self.available()
        );
        assert!(
            preserve < self.capacity(),
            "a {}-byte word does not fit a {}-byte buffer",
            preserve,
            self.capacity()
        );

        if preserve > 0 && self.start > 0 {
            self.data
                .copy_within(self.start..self.start + preserve, 0);
            log::trace!(
                "compacted {:?} to buffer front",
                self.data[..preserve].as_bstr()
            );
        }
        self.start = 0;
        self.end = preserve;

        let read = loop {
            match reader.read(&mut self.data[preserve..]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        self.end += read;

        log::debug!(
            "refill preserved {} bytes, read {} bytes ({} of {} in use)",
            preserve,
            read,
            self.end,
            self.capacity()
        );
        Ok(read)
    }
}
