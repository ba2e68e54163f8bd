//! Record decoders

use crate::error::{Error, Result};
use serde_json::Value;

/// Turns a response body into the records it carries
pub trait RecordDecoder: Send + Sync {
    /// Decode the body into an ordered list of records
    fn decode(&self, body: &str) -> Result<Vec<Value>>;

    /// Parse the body without extracting records
    fn decode_raw(&self, body: &str) -> Result<Value>;
}

/// JSON decoder with optional record path extraction
///
/// Without a path the whole body must be an array of records. With a path
/// such as `data.messages`, the array is looked up under nested object keys.
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    record_path: Option<String>,
}

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON decoder with a record path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: Some(path.into()),
        }
    }

    pub fn record_path(&self) -> Option<&str> {
        self.record_path.as_deref()
    }

    fn extract_records(&self, value: Value) -> Result<Vec<Value>> {
        let target = match &self.record_path {
            Some(path) => extract_path(value, path)
                .ok_or_else(|| Error::decode(format!("No value at record path '{path}'")))?,
            None => value,
        };

        match target {
            Value::Array(records) => Ok(records),
            other => Err(Error::decode(format!(
                "expected an array of records, got {}",
                kind_of(&other)
            ))),
        }
    }
}

impl RecordDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<Vec<Value>> {
        let value = self.decode_raw(body)?;
        self.extract_records(value)
    }

    fn decode_raw(&self, body: &str) -> Result<Value> {
        serde_json::from_str(body).map_err(|e| Error::Decode {
            message: format!("Failed to parse JSON: {e}"),
        })
    }
}

/// Walk a dot-separated path of object keys
fn extract_path(value: Value, path: &str) -> Option<Value> {
    let mut current = value;
    for part in path.split('.').filter(|p| !p.is_empty()) {
        match current {
            Value::Object(mut map) => current = map.remove(part)?,
            _ => return None,
        }
    }
    Some(current)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
