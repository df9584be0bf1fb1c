//! Error taxonomy for the submission pipeline
//!
//! Three failure classes reach the user as one rendered message:
//! validation (no request was made), transport (fetch failed or the response
//! body was malformed), and API (the server answered with a structured error).

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Client-side rejection; produced before any network call
    #[error("{0}")]
    Validation(String),

    /// Network failure or a response body that could not be read
    #[error("Network error: {0}")]
    Transport(String),

    /// Structured failure returned by the server
    #[error("{0}")]
    Api(ApiFailure),
}

/// Server error envelope: `{error, details?, hint?}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiFailure {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl ApiFailure {
    /// Parse a non-success response body into a failure.
    ///
    /// Accepts the JSON error envelope; anything else falls back to a generic
    /// `HTTP <status>: <status_text>` message so a proxy error page or empty
    /// body still produces something readable.
    pub fn parse(status: u16, status_text: &str, body: &str) -> Self {
        match serde_json::from_str::<ApiFailure>(body) {
            Ok(failure) if !failure.error.is_empty() => failure,
            _ => ApiFailure {
                error: format!("HTTP {}: {}", status, status_text),
                details: None,
                hint: None,
            },
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "\nHint: {}", hint)?;
        }
        Ok(())
    }
}
