//! Error types for zoning lookups.
use thiserror::Error;

use crate::lookup::CONNECTION_ERROR_MESSAGE;

/// Everything that can go wrong between submitting a query and rendering a result.
///
/// Only `Application` carries a message meant for the user. The other variants keep
/// their detail for diagnostics and render as the fixed connection message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Non-2xx response; the message comes from the server's `error` field
    #[error("{0}")]
    Application(String),

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),

    /// A response arrived but its body was not the expected JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// No response within the configured timeout
    #[error("Request timed out after {0} ms")]
    Timeout(u64),
}

impl LookupError {
    /// The text shown in the error card.
    pub fn user_message(&self) -> &str {
        match self {
            LookupError::Application(message) => message,
            LookupError::Transport(_)
            | LookupError::MalformedResponse(_)
            | LookupError::Timeout(_) => CONNECTION_ERROR_MESSAGE,
        }
    }
}

/// Type alias for Results using LookupError
pub type Result<T> = std::result::Result<T, LookupError>;
