// ABOUTME: Error types for page enhancement operations.
// ABOUTME: Provides EnhanceError enum with InvalidColor and InvalidSelector variants.

use thiserror::Error;

/// Errors that can occur while enhancing a page.
///
/// Both variants come from configuration, not from page content: they are
/// detected before any rewrite is recorded, so a failed run leaves no
/// partially styled output.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// A configured color is not a valid 3- or 6-digit hex string.
    #[error("invalid color: {0:?} is not a 3- or 6-digit hex color")]
    InvalidColor(String),

    /// A configured CSS selector failed to parse.
    #[error("invalid selector: {0:?}")]
    InvalidSelector(String),
}

impl EnhanceError {
    /// Creates an InvalidColor error for the given input.
    pub fn invalid_color(code: impl Into<String>) -> Self {
        EnhanceError::InvalidColor(code.into())
    }

    /// Creates an InvalidSelector error for the given selector string.
    pub fn invalid_selector(css: impl Into<String>) -> Self {
        EnhanceError::InvalidSelector(css.into())
    }
}
