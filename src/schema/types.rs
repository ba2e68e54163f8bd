//! Schema types

use serde::{Deserialize, Serialize};

/// Semantic type of a field, as understood by the reporting host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SemanticType {
    /// Free text
    Text,
    /// Calendar date at day granularity (`YYYY-MM-DD` or `YYYYMMDD`)
    YearMonthDay,
}

impl SemanticType {
    /// Storage type the host uses for this semantic type
    pub fn data_type(self) -> DataType {
        match self {
            SemanticType::Text | SemanticType::YearMonthDay => DataType::String,
        }
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SemanticType::Text => write!(f, "TEXT"),
            SemanticType::YearMonthDay => write!(f, "YEAR_MONTH_DAY"),
        }
    }
}

/// Storage type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    String,
}

/// Whether a field is a dimension or a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConceptType {
    #[default]
    Dimension,
}

/// A single field of the canonical schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "FieldWire", from = "FieldWire")]
pub struct FieldDefinition {
    /// Unique identifier, also the key used by the row extractors
    pub id: String,
    /// Name shown in the report editor
    pub display_name: String,
    /// How the host interprets values of this field
    pub semantic_type: SemanticType,
}

impl FieldDefinition {
    /// Create a text dimension
    pub fn text(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(id, display_name, SemanticType::Text)
    }

    /// Create a year-month-day dimension
    pub fn year_month_day(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(id, display_name, SemanticType::YearMonthDay)
    }

    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        semantic_type: SemanticType,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            semantic_type,
        }
    }
}

// Host wire format: { name, label, dataType, semantics: { conceptType, semanticType } }
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldWire {
    name: String,
    label: String,
    data_type: DataType,
    semantics: SemanticsWire,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SemanticsWire {
    #[serde(default)]
    concept_type: ConceptType,
    semantic_type: SemanticType,
}

impl From<FieldDefinition> for FieldWire {
    fn from(field: FieldDefinition) -> Self {
        Self {
            data_type: field.semantic_type.data_type(),
            semantics: SemanticsWire {
                concept_type: ConceptType::Dimension,
                semantic_type: field.semantic_type,
            },
            name: field.id,
            label: field.display_name,
        }
    }
}

impl From<FieldWire> for FieldDefinition {
    fn from(wire: FieldWire) -> Self {
        Self::new(wire.name, wire.label, wire.semantics.semantic_type)
    }
}

/// Ordered projection of the canonical schema
///
/// Order is the caller's, not the schema's. Every field comes from the
/// canonical set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSubset {
    fields: Vec<FieldDefinition>,
}

impl FieldSubset {
    pub(crate) fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    /// Field ids in subset order
    pub fn ids(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.id.as_str()).collect()
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDefinition> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldSubset {
    type Item = &'a FieldDefinition;
    type IntoIter = std::slice::Iter<'a, FieldDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Response of the schema declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaResponse {
    pub schema: Vec<FieldDefinition>,
}
