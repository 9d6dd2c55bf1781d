//! File access for the pager: path validation, the working buffer, and the file session
//! that ties a reader to its buffer.
//!
//! The pager never loads a whole file. It streams it through a buffer sized to one page
//! of full-width lines and refills on demand as the word scanner consumes bytes.

pub mod buffer;
pub mod session;
pub mod validation;

pub use buffer::WorkingBuffer;
pub use session::FileSession;
pub use validation::validate_file_path;
