//! Row shaping

use super::extractors::ExtractorTable;
use crate::error::{Error, Result};
use crate::schema::FieldSubset;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One output row, aligned with the field subset that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    pub values: Vec<JsonValue>,
}

/// Maps decoded records onto a field subset
#[derive(Debug, Default)]
pub struct ResponseMapper {
    extractors: ExtractorTable,
}

impl ResponseMapper {
    pub fn new(extractors: ExtractorTable) -> Self {
        Self { extractors }
    }

    pub fn extractors(&self) -> &ExtractorTable {
        &self.extractors
    }

    /// One row per record, in record order
    ///
    /// Values follow the subset's order. A field with no registered
    /// extractor yields `""`. A record that is not a JSON object fails the
    /// whole mapping.
    pub fn map_rows(&self, subset: &FieldSubset, records: &[JsonValue]) -> Result<Vec<OutputRow>> {
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| self.map_record(subset, index, record))
            .collect::<Result<Vec<_>>>()?;

        debug!("Mapped {} records onto {} fields", rows.len(), subset.len());
        Ok(rows)
    }

    fn map_record(&self, subset: &FieldSubset, index: usize, record: &JsonValue) -> Result<OutputRow> {
        let JsonValue::Object(record) = record else {
            return Err(Error::malformed_record(index, "expected a JSON object"));
        };

        let values = subset
            .iter()
            .map(|field| match self.extractors.get(&field.id) {
                Some(extract) => extract(record),
                None => JsonValue::String(String::new()),
            })
            .collect();

        Ok(OutputRow { values })
    }
}

/// Map records with the default extractor table
pub fn map_rows(subset: &FieldSubset, records: &[JsonValue]) -> Result<Vec<OutputRow>> {
    ResponseMapper::default().map_rows(subset, records)
}
