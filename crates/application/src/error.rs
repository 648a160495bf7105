//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (unknown transport method, blank input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The distance service could not be reached or returned a failure status
    #[error("{message}")]
    Transport {
        /// Message naming the city (or cities) involved
        message: String,
        /// HTTP status code, if the service answered
        status: Option<u16>,
    },

    /// The distance service answered with an unusable payload
    #[error("{0}")]
    Resolution(String),
}

impl ApplicationError {
    /// Check if this error was caused by user input rather than the environment
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
