//! Field extractors

use crate::schema::{ACCOUNT_NAME, DATE_SENT, DIRECTION};
use crate::types::{JsonObject, JsonValue};
use std::collections::HashMap;

/// Resolves one field's value from a record
pub type Extractor = Box<dyn Fn(&JsonObject) -> JsonValue + Send + Sync>;

/// Extractor reading a top-level record attribute
pub fn attribute(name: impl Into<String>) -> Extractor {
    let name = name.into();
    Box::new(move |record: &JsonObject| to_scalar(record.get(&name)))
}

/// Normalise an attribute value into a cell value
///
/// Missing and null become `""`. Strings, numbers and booleans pass through.
/// Arrays and objects are rendered as compact JSON text.
pub fn to_scalar(value: Option<&JsonValue>) -> JsonValue {
    match value {
        None | Some(JsonValue::Null) => JsonValue::String(String::new()),
        Some(v @ (JsonValue::String(_) | JsonValue::Number(_) | JsonValue::Bool(_))) => v.clone(),
        Some(nested) => JsonValue::String(nested.to_string()),
    }
}

/// Field id to extractor lookup
pub struct ExtractorTable {
    extractors: HashMap<String, Extractor>,
}

impl ExtractorTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Register an extractor, replacing any previous one for the same id
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, extractor: Extractor) -> Self {
        self.register(id, extractor);
        self
    }

    pub fn register(&mut self, id: impl Into<String>, extractor: Extractor) {
        self.extractors.insert(id.into(), extractor);
    }

    pub fn get(&self, id: &str) -> Option<&Extractor> {
        self.extractors.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.extractors.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractorTable {
    fn default() -> Self {
        Self::new()
            .with(ACCOUNT_NAME, attribute("account_name"))
            .with(DATE_SENT, attribute("date_sent"))
            .with(DIRECTION, attribute("direction"))
    }
}

impl std::fmt::Debug for ExtractorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&str> = self.extractors.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("ExtractorTable").field("ids", &ids).finish()
    }
}
