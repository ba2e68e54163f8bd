//! Secret store capability
//!
//! The API endpoint is not part of the report author's configuration. It is
//! read from a process-wide, read-only store keyed by name.

use crate::config::SecretsSettings;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Read-only lookup of named secrets
pub trait SecretStore: Send + Sync {
    /// Get a secret by name
    fn get(&self, name: &str) -> Option<String>;

    /// Get a secret that must be present and non-empty
    fn require(&self, name: &str) -> Result<String> {
        match self.get(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::missing_secret(name)),
        }
    }
}

/// Secrets from environment variables
///
/// `endpoint` with prefix `SMS_CONNECTOR_` reads `SMS_CONNECTOR_ENDPOINT`.
#[derive(Debug, Clone)]
pub struct EnvSecretStore {
    prefix: String,
}

impl EnvSecretStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable name for a secret
    pub fn var_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name.to_uppercase())
    }
}

impl SecretStore for EnvSecretStore {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(self.var_name(name)).ok()
    }
}

/// Secrets held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSecretStore {
    values: HashMap<String, String>,
}

impl StaticSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl SecretStore for StaticSecretStore {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Secrets from a flat YAML map, read once at load time
#[derive(Debug, Clone)]
pub struct FileSecretStore {
    inner: StaticSecretStore,
}

impl FileSecretStore {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let values: HashMap<String, String> = serde_yaml::from_str(&content)?;
        debug!("Loaded {} secrets from {}", values.len(), path.display());
        Ok(Self {
            inner: StaticSecretStore { values },
        })
    }
}

impl SecretStore for FileSecretStore {
    fn get(&self, name: &str) -> Option<String> {
        self.inner.get(name)
    }
}

/// Build the store described by the settings
pub fn from_settings(settings: &SecretsSettings) -> Result<Box<dyn SecretStore>> {
    match settings {
        SecretsSettings::Env { prefix } => Ok(Box::new(EnvSecretStore::new(prefix.clone()))),
        SecretsSettings::File { path } => Ok(Box::new(FileSecretStore::load(path)?)),
    }
}
