use thiserror::Error;

/// Failures talking to the hosted platform
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("{0} not set in environment")]
    MissingApiKey(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from platform: {0}")]
    Decode(String),
}

impl PlatformError {
    /// HTTP status for errors the platform answered with
    pub fn status(&self) -> Option<u16> {
        match self {
            PlatformError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type PlatformResult<T> = Result<T, PlatformError>;
