//! Pager geometry: page size, line width and the derived buffer capacity.
//!
//! The defaults reproduce the classic 20 × 80 screen. With the `config` feature enabled,
//! values can also be read from `<config_dir>/flowpager/config.toml`:
//!
//! ```toml
//! page_size = 40
//! line_width = 100
//! ```
//!
//! Command-line flags take precedence over the file.

use crate::error::{PagerError, Result};

/// Default number of display lines per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Default maximum display line width in bytes.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Geometry shared by the word, line and page layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct PagerConfig {
    /// Lines rendered per page
    pub page_size: usize,
    /// Maximum bytes per display line, including a trailing newline
    pub line_width: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl PagerConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// Working buffer capacity: one page of full-width lines plus a delimiter each.
    pub fn buffer_capacity(&self) -> usize {
        (self.line_width + 1) * self.page_size
    }

    /// Reject geometries the word scanner cannot honour.
    ///
    /// The scanner has to see `line_width + 1` bytes at once to tell a full-width final
    /// word from an overlong one, so the buffer must hold at least that many.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(PagerError::config("page size must be at least 1"));
        }
        if self.line_width == 0 {
            return Err(PagerError::config("line width must be at least 1"));
        }
        // page_size >= 1, so the capacity is at least line_width + 1 once it fits in usize
        self.line_width
            .checked_add(1)
            .and_then(|w| w.checked_mul(self.page_size))
            .ok_or_else(|| PagerError::config("page geometry is too large"))?;
        Ok(())
    }
}

#[cfg(feature = "config")]
impl PagerConfig {
    /// Parse a TOML configuration file. Missing keys keep their defaults.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PagerError::file_error(format!("Cannot read {}", path.display()), e))?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| PagerError::config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the per-user configuration file, falling back to defaults when it is absent.
    pub fn load_default() -> Result<Self> {
        match dirs::config_dir().map(|dir| dir.join("flowpager").join("config.toml")) {
            Some(path) if path.is_file() => {
                log::debug!("loading configuration from {}", path.display());
                Self::load_from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
