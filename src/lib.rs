//! # SMS Report Connector
//!
//! A reporting-host data connector that exposes a messaging API's SMS records
//! as a flat, three-field table.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sms_report_connector::config::{ConnectorConfig, DateRange};
//! use sms_report_connector::connector::{Connector, DataRequest, SmsConnector};
//! use sms_report_connector::http::ReqwestFetcher;
//! use sms_report_connector::secrets::EnvSecretStore;
//!
//! #[tokio::main]
//! async fn main() -> sms_report_connector::Result<()> {
//!     let connector = SmsConnector::new(
//!         ReqwestFetcher::new()?,
//!         EnvSecretStore::new("SMS_CONNECTOR_"),
//!     );
//!
//!     let request = DataRequest::new(
//!         &["date_sent", "direction"],
//!         &ConnectorConfig::new("AC123"),
//!         DateRange::new("2024-01-01", "2024-01-31"),
//!     );
//!     let response = connector.fetch_data(&request).await?;
//!     println!("{} rows", response.rows.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Connector Interface                      │
//! │  auth_type()   config()   schema()   fetch_data(request)     │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬──────────────────┼──────────────┬─────────────────┐
//! │  Schema  │      HTTP        │    Decode    │     Mapper      │
//! ├──────────┼──────────────────┼──────────────┼─────────────────┤
//! │ Registry │ Request builder  │ JSON array   │ Extractor table │
//! │ Project  │ Fetcher (1 call) │ Record path  │ Output rows     │
//! └──────────┴──────────────────┴──────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Host configuration declaration and runtime settings
pub mod config;

/// Canonical field schema
pub mod schema;

/// Request construction and the HTTP client capability
pub mod http;

/// Secret store capability
pub mod secrets;

/// Response decoding
pub mod decode;

/// Record to row mapping
pub mod mapper;

/// Host entry points and the error boundary
pub mod connector;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use connector::{Connector, DataRequest, DataResponse, SmsConnector};
pub use error::{Error, Result, UserFacingError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
