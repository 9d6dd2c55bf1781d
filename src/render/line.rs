//! Line composer: packs words into display lines no wider than the configured width.

use crate::file_handler::FileSession;
use crate::render::word::{next_word, split_word, WordOutcome};
use std::io::{self, Read};

/// Result of composing one display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// A non-empty line of this many bytes was appended. It is at most the width, or
    /// one byte more when a full-width line ends in the delimiter that broke it.
    Line(usize),
    /// Nothing was left to read
    EndOfInput,
}

/// Append the next display line of at most `max_width` visible bytes to `line`.
///
/// Words are added until one ends in a newline, the width is reached, the next word
/// would not fit, or the file ends. A word that does not fit stays unconsumed and opens
/// the next line. A word that exactly fills the remaining width takes its delimiter
/// along, so the break absorbs the space or newline after it. A token wider than the
/// whole line is cut at `max_width` bytes and the remainder continues on the following
/// line.
///
/// A read failure fails the whole line; bytes already appended to `line` must then be
/// discarded by the caller.
///
/// # Panics
/// Panics if `max_width` is zero or not smaller than the session's buffer capacity.
pub fn next_line<R: Read>(
    session: &mut FileSession<R>,
    max_width: usize,
    line: &mut Vec<u8>,
) -> io::Result<LineOutcome> {
    assert!(max_width > 0, "line width must be non-zero");
    let mut count = 0;

    while count < max_width {
        match next_word(session, max_width - count, line) {
            WordOutcome::Word(len) => {
                count += len;
                if line.last() == Some(&b'\n') {
                    break;
                }
            }
            WordOutcome::LastWord(len) => {
                count += len;
                break;
            }
            WordOutcome::Exhausted => break,
            WordOutcome::TooLong if count == 0 => {
                count += split_word(session, max_width, line)?;
                log::debug!("forced a break inside a token wider than {max_width} bytes");
                break;
            }
            WordOutcome::TooLong => break,
            WordOutcome::ReadError(e) => return Err(e),
        }
    }

    Ok(if count == 0 {
        LineOutcome::EndOfInput
    } else {
        LineOutcome::Line(count)
    })
}
