//! Word scanner: pulls the next whitespace-delimited token out of a file session.
//!
//! A word is a run of non-delimiter bytes plus its single trailing delimiter, if any.
//! Delimiters are space, newline and tab. Carriage return is ordinary content, so CRLF
//! text keeps its `\r` at the end of the word before the `\n`.
//!
//! When the scan reaches the end of the valid buffer region mid-word, the scanner asks
//! the session to compact the partial word to the buffer front and refill. Word
//! boundaries therefore never depend on where the underlying reads happened to stop.

use crate::file_handler::FileSession;
use bstr::ByteSlice;
use memchr::memchr3;
use std::io::{self, Read};

/// Bytes that end a word. The delimiter itself belongs to the word it ends.
pub const DELIMITERS: [u8; 3] = [b' ', b'\n', b'\t'];

pub fn is_delimiter(byte: u8) -> bool {
    DELIMITERS.contains(&byte)
}

/// Result of asking for the next word.
#[derive(Debug)]
pub enum WordOutcome {
    /// A word of this many bytes, ending in its delimiter, was consumed
    Word(usize),
    /// End of file arrived with bytes pending; they were consumed as a final word
    /// without a trailing delimiter
    LastWord(usize),
    /// End of file with nothing pending
    Exhausted,
    /// The word's content is longer than the limit; nothing was consumed
    TooLong,
    /// Refilling the buffer failed; nothing was consumed
    ReadError(io::Error),
}

/// Scan the next word whose content fits in `max_len` bytes and append it to `out`.
///
/// The trailing delimiter does not count against the limit: a word of exactly `max_len`
/// content bytes comes back as `Word(max_len + 1)` with its delimiter, so a line that it
/// fills ends at that delimiter. A word with more than `max_len` content bytes is
/// [`WordOutcome::TooLong`].
///
/// # Panics
/// Panics if `max_len` is not smaller than the buffer capacity, since the scanner must be
/// able to hold `max_len + 1` bytes to classify a word.
pub fn next_word<R: Read>(
    session: &mut FileSession<R>,
    max_len: usize,
    out: &mut Vec<u8>,
) -> WordOutcome {
    // Bytes from the buffer start already known to contain no delimiter
    let mut scanned = 0;

    loop {
        let pending = session.buffer().unconsumed();
        // content plus the delimiter that ends it
        let window = &pending[..pending.len().min(max_len + 1)];

        if let Some(pos) = memchr3(DELIMITERS[0], DELIMITERS[1], DELIMITERS[2], &window[scanned..])
        {
            let len = scanned + pos + 1;
            take(session, len, out);
            return WordOutcome::Word(len);
        }

        scanned = window.len();
        if scanned > max_len {
            return WordOutcome::TooLong;
        }

        // Every pending byte has been scanned; compact them and read more
        match session.refill(scanned) {
            Ok(0) if scanned == 0 => return WordOutcome::Exhausted,
            Ok(0) => {
                take(session, scanned, out);
                return WordOutcome::LastWord(scanned);
            }
            Ok(_) => continue,
            Err(e) => {
                log::warn!("read failed while scanning a word: {}", e);
                return WordOutcome::ReadError(e);
            }
        }
    }
}

/// Consume up to `max_len` bytes unconditionally, appending them to `out`.
///
/// This is the forced break for a token wider than a whole display line: after
/// [`next_word`] reported [`WordOutcome::TooLong`] on an empty line, the token is cut at
/// the line width and the rest continues on the next line. Returns the number of bytes
/// taken, `0` at end of file.
pub fn split_word<R: Read>(
    session: &mut FileSession<R>,
    max_len: usize,
    out: &mut Vec<u8>,
) -> io::Result<usize> {
    if session.buffer().is_empty() && session.refill(0)? == 0 {
        return Ok(0);
    }
    let len = session.buffer().available().min(max_len);
    take(session, len, out);
    Ok(len)
}

fn take<R: Read>(session: &mut FileSession<R>, len: usize, out: &mut Vec<u8>) {
    let word = session.buffer_mut().consume(len);
    log::trace!("word {:?}", word.as_bstr());
    out.extend_from_slice(word);
}
