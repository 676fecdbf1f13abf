//! Domain Errors - invalid names and unreadable configuration

use thiserror::Error;

/// Errors raised while interpreting user-supplied names or configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Role key or alias outside the fixed set
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Coordinator action outside the fixed set
    #[error("Unknown action type: {0}")]
    UnknownAction(String),

    /// Dataset key outside the five known files
    #[error("Unknown data type {0}")]
    UnknownDataset(String),

    /// Configuration document could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::InvalidConfig(err.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
