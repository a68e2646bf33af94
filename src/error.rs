//! Error types for the myassistant server.

use assistant_search::SearchError;

/// Top-level error type for the search backend process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// The request body could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The HTTP listener could not be started.
    #[error("bind error: {0}")]
    Bind(String),

    /// Search pipeline error.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ServerError>;
