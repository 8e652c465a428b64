//! Error types for the portal-suggest crate.
//!
//! All errors use stable string messages suitable for logging and
//! programmatic handling. Transport-level variants never escape the
//! source-fetcher boundary (see [`crate::sources::HttpSource`]); the only
//! variant a caller is expected to observe is [`SuggestError::Config`],
//! which signals a configuration defect rather than a transient condition.

/// Errors that can occur inside the autocomplete pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// A request exceeded its deadline before any response arrived.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The backend answered with a non-2xx HTTP status.
    #[error("HTTP error: {status} {reason}")]
    HttpStatus {
        /// Numeric status code from the response.
        status: u16,
        /// Canonical reason phrase, empty if unknown.
        reason: String,
    },

    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid pipeline configuration (malformed base URL, zero limits).
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for portal-suggest results.
pub type Result<T> = std::result::Result<T, SuggestError>;
