//! OpenRouteService error types

use thiserror::Error;

/// Errors that can occur while talking to OpenRouteService
#[derive(Debug, Error)]
pub enum OrsError {
    /// Client could not be set up (missing token, bad settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request did not complete with a successful status
    #[error("{message}")]
    Transport {
        /// Message naming the city (or cities) the call was about
        message: String,
        /// HTTP status code, absent for connection failures and timeouts
        status: Option<u16>,
    },

    /// The service answered, but the payload lacked the expected shape
    #[error("{0}")]
    Resolution(String),
}

impl OrsError {
    /// Transport failure caused by a non-success HTTP status
    pub fn http_status(subject: &str, status: u16) -> Self {
        Self::Transport {
            message: format!("{subject}: HTTP {status}"),
            status: Some(status),
        }
    }

    /// Transport failure without a status (connection refused, timeout, I/O)
    pub fn io(subject: &str, detail: impl std::fmt::Display) -> Self {
        Self::Transport {
            message: format!("{subject}: {detail}"),
            status: None,
        }
    }
}
