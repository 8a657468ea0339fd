//! Error types for the content pipeline

use thiserror::Error;

/// Errors produced while loading or rendering posts.
///
/// `NotFound` and the parse variants are recoverable at the caller; nothing
/// here is retried automatically.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("post not found: {slug}")]
    NotFound { slug: String },

    #[error("invalid front matter in {path}: {message}")]
    Frontmatter { path: String, message: String },

    #[error("missing required field '{field}' in {path}")]
    MissingField { field: String, path: String },

    #[error("invalid date '{value}' in {path}")]
    InvalidDate { value: String, path: String },

    #[error("load cancelled")]
    Cancelled,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    /// Whether this error came from a cancellation token rather than the
    /// content itself.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ContentError::Cancelled)
    }
}
