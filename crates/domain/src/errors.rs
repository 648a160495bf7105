//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Transport method key is not in the emission factor table
    #[error("Unknown transportation-method: {0}")]
    UnknownTransportMethod(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a validation error for a required field that is blank
    pub fn blank_field(field: &str) -> Self {
        Self::ValidationError(format!("{field} must not be blank"))
    }
}
