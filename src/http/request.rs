//! Outbound request construction

use crate::config::{ConnectorConfig, DateRange};
use crate::error::{Error, Result};
use crate::types::Method;
use serde::Serialize;
use tracing::debug;

/// Content type sent with every request
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A fully built outbound request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    pub url: String,
    pub method: Method,
    pub content_type: String,
}

/// Build the request for one data fetch
///
/// The endpoint is used as a prefix and the query string is appended to it
/// directly, so the endpoint must already end in `?` or `&`. Values are
/// inserted verbatim, without escaping or format checks.
pub fn build_request(
    secret_endpoint: &str,
    config: &ConnectorConfig,
    range: &DateRange,
) -> Result<ApiRequest> {
    if secret_endpoint.is_empty() {
        return Err(Error::config("API endpoint must not be empty"));
    }

    let url = format!(
        "{secret_endpoint}account_sid={}&from_date={}&to_date={}",
        config.account_id, range.start_date, range.end_date
    );
    debug!("Built request for account {}", config.account_id);

    Ok(ApiRequest {
        url,
        method: Method::GET,
        content_type: JSON_CONTENT_TYPE.to_string(),
    })
}
