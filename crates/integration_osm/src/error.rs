//! OSM integration error types

use thiserror::Error;

/// Errors that can occur when talking to the OSM backends
#[derive(Debug, Error)]
pub enum OsmError {
    /// Connection to the backend failed (DNS, reset, refused)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed with a non-transient status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a backend response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Free-text location did not resolve to any place
    #[error("could not find location: {0}")]
    LocationNotFound(String),

    /// The Overpass backend answered 504 (overloaded); retryable
    #[error("Spatial backend overloaded (HTTP 504)")]
    GatewayTimeout,

    /// Retries exhausted; the caller should suggest trying again shortly
    #[error("Service temporarily unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl OsmError {
    /// Returns true for transient failures worth retrying with backoff
    ///
    /// Covers gateway timeouts (the backend is overloaded) and
    /// network-level failures. Other HTTP errors are not transient and
    /// fail immediately.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::GatewayTimeout | Self::ConnectionFailed(_) | Self::Timeout { .. }
        )
    }
}
