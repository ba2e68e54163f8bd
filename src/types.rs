//! Common types used throughout the connector
//!
//! Shared type aliases and small enums used by more than one module.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method used for outbound calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::GET => write!(f, "GET"),
        }
    }
}

// ============================================================================
// Auth Type
// ============================================================================

/// Credential exchange the connector needs from the reporting host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthType {
    /// No credentials are exchanged with the host
    #[default]
    None,
}

/// Response of the authentication declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTypeResponse {
    #[serde(rename = "type")]
    pub auth_type: AuthType,
}

impl AuthTypeResponse {
    pub fn new(auth_type: AuthType) -> Self {
        Self { auth_type }
    }
}

/// Authentication declaration: the API is reached without host credentials
pub fn declare_auth_type() -> AuthTypeResponse {
    AuthTypeResponse::new(AuthType::None)
}
