//! Rendering pipeline: word → line → page.
//!
//! Each layer pulls from the one below through a shared `&mut FileSession` and reports
//! its own distinguished outcomes upward:
//!
//! - [`word`] - tokenizes buffered bytes, refilling transparently ([`WordOutcome`])
//! - [`line`] - packs words into width-bounded lines ([`LineOutcome`])
//! - [`page`] - writes a page of lines plus EOF / error markers ([`PageSummary`])
//! - [`output`] - newline translation for raw-mode terminals

pub mod line;
pub mod output;
pub mod page;
pub mod word;

pub use line::{next_line, LineOutcome};
pub use output::CrlfWriter;
pub use page::{render_page, PageStatus, PageSummary, EOF_MARKER, READ_ERROR_MARKER};
pub use word::{next_word, split_word, WordOutcome};
