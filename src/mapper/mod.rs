//! Response mapper module
//!
//! Shapes decoded API records into host rows. Each requested field is
//! resolved through an extractor looked up by field id, so adding a field to
//! the schema means registering one more extractor.

mod extractors;
mod rows;

pub use extractors::{attribute, to_scalar, Extractor, ExtractorTable};
pub use rows::{map_rows, OutputRow, ResponseMapper};

#[cfg(test)]
mod tests;
