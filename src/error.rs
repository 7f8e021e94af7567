// src/error.rs
use thiserror::Error;

/// Failure of a read against the repository activity API.
#[derive(Error, Debug)]
pub enum ActivityError {
    /// The request never completed: DNS, connect, or timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ActivityError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ActivityError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

pub type Result<T> = std::result::Result<T, ActivityError>;
