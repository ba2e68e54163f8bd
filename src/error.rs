//! Error types for the SMS report connector
//!
//! Internal failures are described by [`Error`]. None of them reach the
//! reporting host directly: the connector's error boundary folds every one of
//! them into a single [`UserFacingError`].

use serde::Serialize;
use thiserror::Error;

/// Fixed message shown to report viewers for any data-fetch failure
pub const USER_ERROR_TEXT: &str = "The connector has encountered an unrecoverable error. \
     Please try again later, or file an issue if this error persists.";

/// Prefix of the diagnostic text attached to a [`UserFacingError`]
pub const DEBUG_TEXT_PREFIX: &str = "Error fetching data from API. Exception details: \n";

/// The internal error type
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Schema Errors
    // ============================================================================
    #[error("Unknown field requested: {field}")]
    UnknownField { field: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Secret '{name}' is not set")]
    MissingSecret { name: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Network Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Malformed record at index {index}: {message}")]
    MalformedRecord { index: usize, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unknown field error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a missing secret error
    pub fn missing_secret(name: impl Into<String>) -> Self {
        Self::MissingSecret { name: name.into() }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a malformed record error
    pub fn malformed_record(index: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            message: message.into(),
        }
    }

    /// Whether this error came from the outbound call rather than local processing
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::InvalidUrl(_)
        )
    }
}

/// Result type alias for the connector
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// User-Facing Error
// ============================================================================

/// The only error kind the reporting host ever sees
///
/// `text` never varies with the cause. `debug_text` carries the detail and is
/// shown only when the host runs in diagnostic mode.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{text}")]
#[serde(rename_all = "camelCase")]
pub struct UserFacingError {
    /// Message shown to report viewers
    pub text: String,
    /// Diagnostic detail for connector administrators
    pub debug_text: String,
}

impl UserFacingError {
    /// Wrap an internal error
    pub fn from_error(err: &Error) -> Self {
        Self {
            text: USER_ERROR_TEXT.to_string(),
            debug_text: format!("{DEBUG_TEXT_PREFIX}{err}"),
        }
    }
}

impl From<Error> for UserFacingError {
    fn from(err: Error) -> Self {
        Self::from_error(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unknown_field("sender");
        assert_eq!(err.to_string(), "Unknown field requested: sender");

        let err = Error::missing_field("account_sid");
        assert_eq!(err.to_string(), "Missing required config field: account_sid");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::malformed_record(2, "expected an object");
        assert_eq!(
            err.to_string(),
            "Malformed record at index 2: expected an object"
        );
    }

    #[test]
    fn test_is_network() {
        assert!(Error::http_status(500, "").is_network());
        assert!(Error::InvalidUrl(url::ParseError::EmptyHost).is_network());

        assert!(!Error::decode("bad").is_network());
        assert!(!Error::unknown_field("x").is_network());
        assert!(!Error::missing_secret("endpoint").is_network());
    }

    #[test]
    fn test_user_facing_error_hides_cause() {
        let a = UserFacingError::from(Error::http_status(503, "upstream down"));
        let b = UserFacingError::from(Error::decode("expected value at line 1"));

        assert_eq!(a.text, USER_ERROR_TEXT);
        assert_eq!(a.text, b.text);
        assert_eq!(a.to_string(), USER_ERROR_TEXT);
    }

    #[test]
    fn test_user_facing_error_debug_text() {
        let err = UserFacingError::from(Error::http_status(503, "upstream down"));
        assert_eq!(
            err.debug_text,
            "Error fetching data from API. Exception details: \nHTTP 503: upstream down"
        );
    }

    #[test]
    fn test_user_facing_error_serializes_camel_case() {
        let err = UserFacingError::from(Error::decode("bad"));
        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("debugText").is_some());
        assert!(json.get("text").is_some());
    }
}
