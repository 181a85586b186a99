//! Fetch error definitions.

use thiserror::Error;

/// Errors that can occur while fetching from the lookup endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The target URL could not be parsed. No network I/O was attempted.
    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP request could not be built.
    #[error("failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    /// Connection, TLS or body read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The deadline elapsed before a result arrived.
    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    /// The in-flight request observed cancellation.
    #[error("request cancelled")]
    Cancelled,

    /// The background task ended without reporting a result.
    #[error("fetch task failed: {0}")]
    Task(String),
}

impl FetchError {
    /// True for the locally synthesised deadline error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
