//! Error types for the library API.

use thiserror::Error;

/// A required input was empty. Raised before any side effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The backend answered with a well-formed reply whose status is not a success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{detail}")]
pub struct ProtocolError {
    pub detail: String,
}

/// The exchange itself failed: nothing usable came back.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP request could not be completed (DNS, connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON that was expected.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured server URL or endpoint could not be resolved.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The connection failed for a reason reported as text.
    #[error("Connection failed: {0}")]
    Connection(String),
}

/// Errors related to the prompt library (validation, slot access, serialization).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No entry carries the requested ID.
    #[error("No prompt with ID {0}")]
    NotFound(u64),

    /// An underlying file I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The library slot did not hold a valid list of prompts.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The largest ID in the library is already `u64::MAX`.
    #[error("No free prompt ID left in the library")]
    IdsExhausted,

    #[error("Library lock poisoned")]
    Lock,
}
