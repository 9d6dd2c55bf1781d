//! Page renderer: writes one page of composed lines to an output stream.
//!
//! End of input and read failures are reported in-band, as marker lines in the output
//! and as a [`PageStatus`], so the caller can keep paging or stop. Only failures of the
//! output stream itself are errors.

use crate::config::PagerConfig;
use crate::error::{PagerError, Result};
use crate::file_handler::FileSession;
use crate::render::line::{next_line, LineOutcome};
use std::io::{self, Read, Write};

/// Marker line written when a page reaches the end of the file.
pub const EOF_MARKER: &str = "=== EOF ===";
/// Marker line written when reading the file fails mid-page.
pub const READ_ERROR_MARKER: &str = "(error reading file)";

/// How a page render ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// All `page_size` lines were rendered; more input may follow
    Full,
    /// The file ended before the page filled; the EOF marker was written
    EndOfInput,
    /// A read failed; the error marker was written
    ReadFailed(io::ErrorKind),
}

/// Outcome of rendering one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    /// Content lines written, markers excluded
    pub lines: usize,
    /// Content bytes written, appended newlines excluded
    pub bytes: usize,
    pub status: PageStatus,
}

impl PageSummary {
    pub fn reached_end(&self) -> bool {
        self.status == PageStatus::EndOfInput
    }
}

/// Render up to `config.page_size` lines of `config.line_width` bytes to `out`.
///
/// Each line is written as soon as it is composed, followed by `\n` unless it already
/// ends with one. A line that fills the whole width is written without the delimiter
/// that ended it, so no output line is wider than `config.line_width`. Safe to call repeatedly: every call continues where the session left
/// off, and once the input is exhausted each call writes the EOF marker again.
pub fn render_page<R: Read, W: Write>(
    session: &mut FileSession<R>,
    config: &PagerConfig,
    out: &mut W,
) -> Result<PageSummary> {
    let mut line = Vec::with_capacity(config.line_width);
    let mut summary = PageSummary {
        lines: 0,
        bytes: 0,
        status: PageStatus::Full,
    };

    while summary.lines < config.page_size {
        line.clear();
        match next_line(session, config.line_width, &mut line) {
            Ok(LineOutcome::Line(len)) => {
                // the delimiter ending a full-width line becomes the line break
                let text = if len > config.line_width {
                    &line[..config.line_width]
                } else {
                    &line[..]
                };
                out.write_all(text).map_err(PagerError::output)?;
                if text.last() != Some(&b'\n') {
                    out.write_all(b"\n").map_err(PagerError::output)?;
                }
                summary.lines += 1;
                summary.bytes += len;
            }
            Ok(LineOutcome::EndOfInput) => {
                writeln!(out, "{}", EOF_MARKER).map_err(PagerError::output)?;
                summary.status = PageStatus::EndOfInput;
                break;
            }
            Err(e) => {
                log::warn!("page render stopped by read failure: {}", e);
                writeln!(out, "{}", READ_ERROR_MARKER).map_err(PagerError::output)?;
                summary.status = PageStatus::ReadFailed(e.kind());
                break;
            }
        }
    }

    log::debug!(
        "rendered {} lines ({} bytes), status {:?}",
        summary.lines,
        summary.bytes,
        summary.status
    );
    Ok(summary)
}
