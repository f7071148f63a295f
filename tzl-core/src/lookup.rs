//! The `/api/zoning` request/response contract.
//!
//! The server answers 2xx with `{city, link, file_type?, notes?}` and anything else with
//! `{error?}`. [`interpret_response`] folds a status code and raw body into a typed result.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::query::SearchQuery;

/// Shown when the server rejects a lookup without saying why.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Shown for every failure that is not a server-supplied message.
pub const CONNECTION_ERROR_MESSAGE: &str = "Failed to connect to the server. Please try again.";

/// Displayed file type when the server omits one.
pub const DEFAULT_FILE_TYPE: &str = "PDF";

/// JSON body of `POST /api/zoning`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupRequest<'a> {
    pub city: &'a SearchQuery,
}

impl<'a> LookupRequest<'a> {
    pub fn new(city: &'a SearchQuery) -> Self {
        Self { city }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A zoning document reference returned by a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub city: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LookupResult {
    /// File type for display, falling back to "PDF" when absent or blank.
    pub fn display_file_type(&self) -> &str {
        self.file_type
            .as_deref()
            .filter(|file_type| !file_type.is_empty())
            .unwrap_or(DEFAULT_FILE_TYPE)
    }

    /// Notes for display; `None` means the notes section is omitted.
    pub fn display_notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|notes| !notes.is_empty())
    }
}

/// Turn an HTTP status and body into a lookup outcome.
///
/// - Body that is not JSON: `MalformedResponse`, whatever the status.
/// - 2xx: the body must decode as a [`LookupResult`], otherwise `MalformedResponse`.
/// - Anything else: `Application` with the body's `error` string, or the unknown-error text.
pub fn interpret_response(status: u16, body: &str) -> Result<LookupResult, LookupError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

    if (200..300).contains(&status) {
        return serde_json::from_value(value)
            .map_err(|e| LookupError::MalformedResponse(e.to_string()));
    }

    let message = value
        .get("error")
        .and_then(|error| error.as_str())
        .filter(|error| !error.is_empty())
        .unwrap_or(UNKNOWN_ERROR_MESSAGE);
    debug!("Lookup rejected with status {}: {}", status, message);
    Err(LookupError::Application(message.to_string()))
}
