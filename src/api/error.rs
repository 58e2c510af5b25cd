//! Sync errors

use thiserror::Error;

/// Message shown when the server fails without saying why
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// The request never got a response (network down, timeout, CORS...)
    #[error("{0}")]
    Transport(String),
    /// The server answered with an `{error}` body
    #[error("{0}")]
    Server(String),
    /// A success response did not have the expected shape
    #[error("{0}")]
    Decode(String),
    /// Rejected before any request was sent
    #[error("{0}")]
    Validation(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Decode(err.to_string())
    }
}
