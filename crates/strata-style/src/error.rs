//! Error types for the styling layer.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling layer.
///
/// Style accessors never fail; unrecognized input degrades to a documented
/// fallback value instead. Errors only surface from the stylesheet text
/// parser, and even there individual malformed rules are skipped rather
/// than aborting the parse.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// CSS parsing error.
    #[error("CSS parse error: {message}")]
    Parse { message: String },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
