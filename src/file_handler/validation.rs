//! File validation utilities for ensuring a path can be paged.
//!
//! These checks run before the file is opened so the user gets a specific message
//! ("not found", "is a directory") instead of a bare OS error.

use crate::error::{PagerError, Result};
use std::fs::File;
use std::path::Path;

/// Validate that a file path is accessible and suitable for paging
///
/// # Validations Performed
/// - Path exists
/// - Path is a regular file (symlinks are followed)
/// - File is readable by the current process
///
/// Empty files are accepted; they render a single end-of-file marker.
pub fn validate_file_path(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| PagerError::open_error(path, e))?;

    if !metadata.is_file() {
        return Err(PagerError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    // Try to open the file to verify read permissions
    File::open(path).map_err(|e| PagerError::open_error(path, e))?;

    Ok(())
}
