//! Application-level errors

use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A free-text location could not be resolved to coordinates
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// An upstream data service is overloaded or down
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Network-level failure reaching an upstream service
    #[error("Network error: {0}")]
    Network(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse error classification carried alongside user-facing messages
///
/// Lets the presentation layer pick a status code without parsing
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The location could not be resolved
    LocationNotFound,
    /// An upstream service is overloaded or down
    ServiceUnavailable,
    /// A network-level failure
    Network,
    /// Anything else
    Other,
}

impl ApplicationError {
    /// Coarse classification of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::LocationNotFound(_) => ErrorKind::LocationNotFound,
            ApplicationError::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
            ApplicationError::Network(_) => ErrorKind::Network,
            _ => ErrorKind::Other,
        }
    }

    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::ServiceUnavailable(_) | ApplicationError::Network(_)
        )
    }

    /// User-facing message for this error
    ///
    /// A failed geocode asks the user to rephrase; a transient upstream
    /// failure asks them to retry shortly. The two must stay
    /// distinguishable so the UI can render the right recommendation.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApplicationError::LocationNotFound(input) => {
                format!("Could not find \"{input}\". Try a suburb, city, or postcode.")
            },
            ApplicationError::ServiceUnavailable(_) => {
                "Service temporarily unavailable. Please try again in a few moments.".to_string()
            },
            ApplicationError::Network(_) => {
                "Network problem while searching. Check your connection and try again.".to_string()
            },
            _ => "Something went wrong while searching. Please try again.".to_string(),
        }
    }
}
