//! Optional external stylesheet.

use std::path::Path;

/// Shown when the stylesheet file is absent.
pub const MISSING_STYLESHEET_WARNING: &str =
    "CSS file not found. Please ensure 'style.css' is in the same directory.";

/// Stylesheet text read once at startup, or nothing if the file is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    css: Option<String>,
}

impl Stylesheet {
    /// Read the stylesheet at `path`.
    ///
    /// A missing or unreadable file is not an error: a warning is logged and
    /// the page falls back to its built-in styling.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(css) => {
                tracing::info!(path = %path.display(), bytes = css.len(), "Stylesheet loaded");
                Self { css: Some(css) }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "{}", MISSING_STYLESHEET_WARNING);
                Self { css: None }
            }
        }
    }

    pub fn from_css(css: impl Into<String>) -> Self {
        Self {
            css: Some(css.into()),
        }
    }

    pub fn css(&self) -> Option<&str> {
        self.css.as_deref()
    }

    pub fn is_missing(&self) -> bool {
        self.css.is_none()
    }

    /// The warning to display, if the stylesheet is missing.
    pub fn warning(&self) -> Option<&'static str> {
        self.is_missing().then_some(MISSING_STYLESHEET_WARNING)
    }
}
