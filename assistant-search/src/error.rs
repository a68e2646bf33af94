//! Error types for the assistant-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Provider failures are absorbed by the
//! fallback orchestrator; only [`SearchError::Validation`] normally
//! reaches a caller.

/// Errors that can occur during web search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request was rejected before any provider was contacted.
    #[error("invalid request: {0}")]
    Validation(String),

    /// An HTTP request to a search provider failed to complete.
    #[error("network error: {0}")]
    Network(String),

    /// A provider did not answer within the per-request timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// A provider answered with a non-success HTTP status.
    #[error("{provider} returned HTTP {status}")]
    Status {
        /// Display name of the provider.
        provider: String,
        /// The HTTP status code received.
        status: u16,
    },

    /// Failed to parse a provider's response HTML.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Short failure-class label used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Network(_) => "network",
            Self::Timeout(_) => "timeout",
            Self::Status { .. } => "status",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
        }
    }

    /// Returns `true` if this error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Convenience type alias for assistant-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
