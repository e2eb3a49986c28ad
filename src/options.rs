//! Configuration options for INI encoding.
//!
//! This module provides types to customize encoder output:
//!
//! - [`EncodeOptions`]: Main configuration struct
//! - [`LineEnding`]: Line terminator for scalar and header lines
//!
//! A plain `&str` or `String` converts into options that only set the
//! section name, so `encode(&doc, "main")` is shorthand for
//! `encode(&doc, EncodeOptions::new().with_section("main"))`.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini::{encode, ini, EncodeOptions, LineEnding};
//!
//! let doc = ini!({ "host": "localhost" });
//! let doc = doc.as_section().unwrap();
//!
//! let options = EncodeOptions::new()
//!     .with_section("server")
//!     .with_whitespace(true)
//!     .with_line_ending(LineEnding::Lf);
//! assert_eq!(encode(doc, options).unwrap(), "[server]\nhost = localhost\n");
//! ```

/// Line terminator used after scalar lines and section headers.
///
/// Array element lines always end in `\n`, whichever terminator is chosen.
///
/// # Examples
///
/// ```rust
/// use serde_ini::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// The host convention: `CrLf` on Windows targets, `Lf` everywhere else.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

/// Configuration options for INI encoding.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{EncodeOptions, LineEnding};
///
/// let options = EncodeOptions::new();
/// assert_eq!(options.section, None);
/// assert!(!options.whitespace);
/// assert_eq!(options.line_ending, LineEnding::native());
///
/// let options: EncodeOptions = "main".into();
/// assert_eq!(options.section.as_deref(), Some("main"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EncodeOptions {
    /// Section that top-level keys are written under. Nested sections are
    /// prefixed with it. An empty name is treated as no section.
    pub section: Option<String>,
    /// Write `key = value` instead of `key=value`.
    pub whitespace: bool,
    pub line_ending: LineEnding,
    /// Deepest section nesting the encoder will follow.
    pub max_depth: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            section: None,
            whitespace: false,
            line_ending: LineEnding::native(),
            max_depth: 64,
        }
    }
}

impl EncodeOptions {
    /// Creates default options: no section, `=` without padding, native line endings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the section that top-level keys are written under.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Pads the `=` separator with spaces.
    #[must_use]
    pub fn with_whitespace(mut self, whitespace: bool) -> Self {
        self.whitespace = whitespace;
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Sets the nesting limit; encoding a deeper document fails with
    /// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The key/value separator these options produce.
    #[must_use]
    pub const fn separator(&self) -> &'static str {
        if self.whitespace {
            " = "
        } else {
            "="
        }
    }

    /// The section name, with an empty name treated as absent.
    pub(crate) fn section_name(&self) -> Option<&str> {
        self.section.as_deref().filter(|s| !s.is_empty())
    }
}

impl From<&str> for EncodeOptions {
    fn from(section: &str) -> Self {
        EncodeOptions::new().with_section(section)
    }
}

impl From<String> for EncodeOptions {
    fn from(section: String) -> Self {
        EncodeOptions::new().with_section(section)
    }
}

impl From<&EncodeOptions> for EncodeOptions {
    fn from(options: &EncodeOptions) -> Self {
        options.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator() {
        assert_eq!(EncodeOptions::new().separator(), "=");
        assert_eq!(EncodeOptions::new().with_whitespace(true).separator(), " = ");
    }

    #[test]
    fn test_string_shorthand_keeps_defaults() {
        let options = EncodeOptions::from(String::from("S"));
        assert_eq!(options.section.as_deref(), Some("S"));
        assert!(!options.whitespace);
        assert_eq!(options.max_depth, 64);
    }

    #[test]
    fn test_empty_section_is_absent() {
        let options = EncodeOptions::new().with_section("");
        assert_eq!(options.section_name(), None);
        assert_eq!(EncodeOptions::from("x").section_name(), Some("x"));
    }

    #[test]
    fn test_native_line_ending() {
        let expected = if cfg!(windows) { "\r\n" } else { "\n" };
        assert_eq!(LineEnding::default().as_str(), expected);
    }
}
