//! Response decoder module
//!
//! Turns the raw response body into the ordered list of records the mapper
//! consumes. The remote API answers with a JSON array, optionally nested
//! under an object key.

mod decoders;

pub use decoders::{JsonDecoder, RecordDecoder};

#[cfg(test)]
mod tests;
