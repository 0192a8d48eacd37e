//! Client error types

use thiserror::Error;

/// Errors returned by Marathon operations
#[derive(Debug, Error)]
pub enum MarathonError {
    /// The scheduler has no such resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// Create collided with an existing application id
    #[error("Application already exists: {0}")]
    AlreadyExists(String),

    /// Rejected locally before any request was sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the scheduler
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidArgument,
    TransportOrDecoding,
    Configuration,
}

impl MarathonError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarathonError::NotFound(_) => ErrorKind::NotFound,
            MarathonError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            MarathonError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            MarathonError::Http(_) | MarathonError::Api { .. } | MarathonError::Json(_) => {
                ErrorKind::TransportOrDecoding
            }
            MarathonError::Config(_) | MarathonError::Io(_) => ErrorKind::Configuration,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind() == ErrorKind::AlreadyExists
    }

    /// HTTP status of an API error response
    pub fn status(&self) -> Option<u16> {
        match self {
            MarathonError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for Marathon operations
pub type MarathonResult<T> = Result<T, MarathonError>;
