//! HTTP module
//!
//! Builds the single outbound request for a data fetch and sends it.
//!
//! # Overview
//!
//! - [`build_request`] turns the endpoint secret, the account config and the
//!   date range into an [`ApiRequest`]. It performs no I/O.
//! - [`HttpFetcher`] is the capability that performs the call.
//!   [`ReqwestFetcher`] is the production implementation. One attempt per
//!   call, no retries.

mod client;
mod request;

pub use client::{HttpClientConfig, HttpFetcher, ReqwestFetcher};
pub use request::{build_request, ApiRequest, JSON_CONTENT_TYPE};
