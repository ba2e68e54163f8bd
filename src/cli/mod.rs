//! CLI module
//!
//! Command-line front end and HTTP host adapter for the connector.
//!
//! # Commands
//!
//! - `auth-type` - Print the authentication declaration
//! - `config` - Print the configuration declaration
//! - `schema` - Print the field schema
//! - `fetch` - Fetch rows for a set of fields
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve};
