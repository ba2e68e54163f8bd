//! Configuration types
//!
//! Two kinds of configuration live here:
//!
//! - what the connector asks of the report author (the configuration
//!   declaration, the per-call [`ConnectorConfig`] and [`DateRange`])
//! - how the process itself runs ([`ConnectorSettings`], loaded from YAML)

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config parameter holding the messaging account identifier
pub const ACCOUNT_SID_PARAM: &str = "account_sid";

// ============================================================================
// Configuration Declaration
// ============================================================================

/// Kind of input widget the host renders for a config field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigFieldKind {
    Text,
}

/// A single user-supplied configuration field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigField {
    pub id: String,
    pub kind: ConfigFieldKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl ConfigField {
    /// Create a text input field
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ConfigFieldKind::Text,
            label: label.into(),
            placeholder: None,
        }
    }

    /// Set the placeholder text
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Response of the configuration declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub fields: Vec<ConfigField>,
    pub requires_date_range: bool,
}

/// The configuration this connector declares to the host
pub fn declare_config() -> ConfigResponse {
    ConfigResponse {
        fields: vec![ConfigField::text(ACCOUNT_SID_PARAM, "Enter SID").placeholder("SID")],
        requires_date_range: true,
    }
}

// ============================================================================
// Per-Call Configuration
// ============================================================================

/// Account the report author entered
///
/// Opaque beyond interpolation into the request URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorConfig {
    #[serde(rename = "account_sid")]
    pub account_id: String,
}

impl ConnectorConfig {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }

    /// Read the config from the host's `configParams` object
    pub fn from_params(params: Option<&JsonObject>) -> Result<Self> {
        match params.and_then(|p| p.get(ACCOUNT_SID_PARAM)) {
            Some(JsonValue::String(sid)) => Ok(Self::new(sid.clone())),
            Some(other) => Err(Error::config(format!(
                "'{ACCOUNT_SID_PARAM}' must be a string, got {other}"
            ))),
            None => Err(Error::missing_field(ACCOUNT_SID_PARAM)),
        }
    }
}

/// Reporting window, both ends as `YYYY-MM-DD`
///
/// Values are passed to the remote API untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// The host's default window: the 28 days ending yesterday
    pub fn last_28_days(today: chrono::NaiveDate) -> Self {
        let end = today - chrono::Duration::days(1);
        let start = end - chrono::Duration::days(27);
        Self::new(
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        )
    }
}

// ============================================================================
// Runtime Settings
// ============================================================================

/// Process-level settings, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorSettings {
    /// Name of the secret holding the API endpoint base URL
    #[serde(default = "default_endpoint_secret")]
    pub endpoint_secret: String,

    /// Timeout for the outbound call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with the outbound call
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Extra headers sent with the outbound call
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Dot-separated path to the record array when the API nests it
    #[serde(default)]
    pub record_path: Option<String>,

    /// Where secrets are read from
    #[serde(default)]
    pub secrets: SecretsSettings,
}

fn default_endpoint_secret() -> String {
    "endpoint".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("sms-report-connector/{}", env!("CARGO_PKG_VERSION"))
}

fn default_env_prefix() -> String {
    "SMS_CONNECTOR_".to_string()
}

impl Default for ConnectorSettings {
    fn default() -> Self {
        Self {
            endpoint_secret: default_endpoint_secret(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            headers: HashMap::new(),
            record_path: None,
            secrets: SecretsSettings::default(),
        }
    }
}

impl ConnectorSettings {
    /// Load settings from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        if settings.endpoint_secret.trim().is_empty() {
            return Err(Error::config("endpoint_secret must not be empty"));
        }
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Secret store backing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SecretsSettings {
    /// Environment variables, `<prefix><NAME>`
    Env {
        #[serde(default = "default_env_prefix")]
        prefix: String,
    },
    /// A flat YAML map of name to value
    File { path: PathBuf },
}

impl Default for SecretsSettings {
    fn default() -> Self {
        Self::Env {
            prefix: default_env_prefix(),
        }
    }
}
