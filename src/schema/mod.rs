//! Schema registry module
//!
//! Declares the fixed, ordered set of fields this connector exposes and
//! projects it onto the subset a caller asks for.
//!
//! # Fields
//!
//! - `account_name` - account the message belongs to (text dimension)
//! - `date_sent` - day the message was sent (year-month-day dimension)
//! - `direction` - inbound or outbound (text dimension)

mod registry;
mod types;

pub use registry::{declare_fields, SchemaRegistry, ACCOUNT_NAME, DATE_SENT, DIRECTION};
pub use types::{ConceptType, DataType, FieldDefinition, FieldSubset, SchemaResponse, SemanticType};

#[cfg(test)]
mod tests;
