//! Application Layer Errors

use domain::errors::DomainError;
use platform::PlatformError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain layer errors
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// A dataset file exists but could not be read or parsed
    #[error("Failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Directory listing or file access outside the CSV reader
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Hosted platform errors
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Action has no remote identifier in the registry
    #[error("No agent registered for {0}")]
    Unregistered(String),

    /// Agent or team creation failed, aborting provisioning
    #[error("Failed to create {agent}: {source}")]
    Provision {
        agent: String,
        #[source]
        source: PlatformError,
    },
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
