//! Canonical field set and projection

use super::types::{FieldDefinition, FieldSubset, SchemaResponse};
use crate::error::{Error, Result};
use std::collections::HashSet;
use tracing::debug;

/// Account the message belongs to
pub const ACCOUNT_NAME: &str = "account_name";
/// Day the message was sent
pub const DATE_SENT: &str = "date_sent";
/// Message direction
pub const DIRECTION: &str = "direction";

/// The canonical, ordered schema
///
/// New fields are appended here and given an extractor in the mapper.
pub fn declare_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::text(ACCOUNT_NAME, "Account Name"),
        FieldDefinition::year_month_day(DATE_SENT, "Date Sent"),
        FieldDefinition::text(DIRECTION, "Messages Sent"),
    ]
}

/// Holds the canonical schema and answers projection requests
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    fields: Vec<FieldDefinition>,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self {
            fields: declare_fields(),
        }
    }
}

impl SchemaRegistry {
    /// Build a registry from an explicit field list
    ///
    /// Field ids must be unique.
    pub fn new(fields: Vec<FieldDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.id.as_str()) {
                return Err(Error::config(format!(
                    "Duplicate field id in schema: {}",
                    field.id
                )));
            }
        }
        Ok(Self { fields })
    }

    /// All fields in canonical order
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Look up a field by id
    pub fn get(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The full schema, as returned to the host
    pub fn schema(&self) -> SchemaResponse {
        SchemaResponse {
            schema: self.fields.clone(),
        }
    }

    /// Project the schema onto the requested ids, keeping the caller's order
    ///
    /// Fails on the first id that is not part of the canonical schema.
    pub fn project<S: AsRef<str>>(&self, ids: &[S]) -> Result<FieldSubset> {
        let fields = ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                self.get(id)
                    .cloned()
                    .ok_or_else(|| Error::unknown_field(id))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Projected {} of {} fields", fields.len(), self.fields.len());
        Ok(FieldSubset::new(fields))
    }
}
