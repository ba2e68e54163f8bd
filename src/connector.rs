//! Connector entry points
//!
//! Defines the [`Connector`] trait the reporting host drives, and
//! [`SmsConnector`], which implements it over injected capabilities: an
//! [`HttpFetcher`] for the outbound call and a [`SecretStore`] for the API
//! endpoint.
//!
//! `fetch_data` is the error boundary. Everything inside it returns the
//! internal [`Error`]; only a [`UserFacingError`] leaves it.

use crate::config::{declare_config, ConfigResponse, ConnectorConfig, ConnectorSettings, DateRange};
use crate::decode::{JsonDecoder, RecordDecoder};
use crate::error::{Error, Result, UserFacingError};
use crate::http::{build_request, HttpClientConfig, HttpFetcher, ReqwestFetcher};
use crate::mapper::{OutputRow, ResponseMapper};
use crate::schema::{FieldSubset, SchemaRegistry, SchemaResponse};
use crate::secrets::{self, SecretStore};
use crate::types::{declare_auth_type, AuthTypeResponse, JsonObject};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

// ============================================================================
// Requests and Responses
// ============================================================================

/// A field the host asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedField {
    pub name: String,
}

/// Data-fetch request as sent by the host
///
/// Config and date range are optional on the wire so that their absence is
/// reported through the error boundary instead of failing deserialisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequest {
    #[serde(default)]
    pub fields: Vec<RequestedField>,
    #[serde(default)]
    pub config_params: Option<JsonObject>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl DataRequest {
    /// Build a complete request
    pub fn new<S: AsRef<str>>(fields: &[S], config: &ConnectorConfig, range: DateRange) -> Self {
        let mut params = JsonObject::new();
        params.insert(
            crate::config::ACCOUNT_SID_PARAM.to_string(),
            config.account_id.clone().into(),
        );

        Self {
            fields: fields
                .iter()
                .map(|f| RequestedField {
                    name: f.as_ref().to_string(),
                })
                .collect(),
            config_params: Some(params),
            date_range: Some(range),
        }
    }

    /// Requested field ids, in request order
    pub fn field_ids(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Data-fetch result: the projected schema and one row per record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse {
    pub schema: FieldSubset,
    pub rows: Vec<OutputRow>,
}

// ============================================================================
// Connector Trait
// ============================================================================

/// Entry points the reporting host calls
#[async_trait]
pub trait Connector: Send + Sync {
    /// Credential exchange required from the host
    fn auth_type(&self) -> AuthTypeResponse;

    /// Inputs the report author must supply
    fn config(&self) -> ConfigResponse;

    /// The full field schema
    fn schema(&self) -> SchemaResponse;

    /// Fetch rows for the requested fields
    async fn fetch_data(
        &self,
        request: &DataRequest,
    ) -> std::result::Result<DataResponse, UserFacingError>;

    /// Whether debug text may be shown to the caller
    fn is_diagnostic_mode_enabled(&self) -> bool;
}

// ============================================================================
// SMS Connector
// ============================================================================

/// Connector over the messaging API's SMS records
pub struct SmsConnector {
    registry: SchemaRegistry,
    mapper: ResponseMapper,
    decoder: JsonDecoder,
    fetcher: Box<dyn HttpFetcher>,
    secrets: Box<dyn SecretStore>,
    endpoint_secret: String,
}

impl SmsConnector {
    /// Secret name the endpoint is read from unless overridden
    pub const DEFAULT_ENDPOINT_SECRET: &'static str = "endpoint";

    /// Create a connector with the default schema, mapper and decoder
    pub fn new(
        fetcher: impl HttpFetcher + 'static,
        secrets: impl SecretStore + 'static,
    ) -> Self {
        Self {
            registry: SchemaRegistry::default(),
            mapper: ResponseMapper::default(),
            decoder: JsonDecoder::new(),
            fetcher: Box::new(fetcher),
            secrets: Box::new(secrets),
            endpoint_secret: Self::DEFAULT_ENDPOINT_SECRET.to_string(),
        }
    }

    /// Wire up a connector from runtime settings
    pub fn from_settings(settings: &ConnectorSettings) -> Result<Self> {
        let mut builder = HttpClientConfig::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.clone());
        for (key, value) in &settings.headers {
            builder = builder.header(key.clone(), value.clone());
        }
        let http_config = builder.build();

        let decoder = match &settings.record_path {
            Some(path) => JsonDecoder::with_path(path.clone()),
            None => JsonDecoder::new(),
        };

        Ok(Self {
            registry: SchemaRegistry::default(),
            mapper: ResponseMapper::default(),
            decoder,
            fetcher: Box::new(ReqwestFetcher::with_config(http_config)?),
            secrets: secrets::from_settings(&settings.secrets)?,
            endpoint_secret: settings.endpoint_secret.clone(),
        })
    }

    #[must_use]
    pub fn with_endpoint_secret(mut self, name: impl Into<String>) -> Self {
        self.endpoint_secret = name.into();
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: SchemaRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_mapper(mut self, mapper: ResponseMapper) -> Self {
        self.mapper = mapper;
        self
    }

    #[must_use]
    pub fn with_decoder(mut self, decoder: JsonDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Project, fetch, decode and map, failing on the first error
    pub async fn try_fetch_data(&self, request: &DataRequest) -> Result<DataResponse> {
        let subset = self.registry.project(&request.field_ids())?;
        let config = ConnectorConfig::from_params(request.config_params.as_ref())?;
        let range = request
            .date_range
            .as_ref()
            .ok_or_else(|| Error::missing_field("dateRange"))?;

        let endpoint = self.secrets.require(&self.endpoint_secret)?;
        let api_request = build_request(&endpoint, &config, range)?;

        debug!(
            "Fetching messages for account {} from {} to {}",
            config.account_id, range.start_date, range.end_date
        );
        let body = self.fetcher.fetch(&api_request).await?;
        let records = self.decoder.decode(&body)?;
        let rows = self.mapper.map_rows(&subset, &records)?;

        Ok(DataResponse {
            schema: subset,
            rows,
        })
    }
}

#[async_trait]
impl Connector for SmsConnector {
    fn auth_type(&self) -> AuthTypeResponse {
        declare_auth_type()
    }

    fn config(&self) -> ConfigResponse {
        declare_config()
    }

    fn schema(&self) -> SchemaResponse {
        self.registry.schema()
    }

    async fn fetch_data(
        &self,
        request: &DataRequest,
    ) -> std::result::Result<DataResponse, UserFacingError> {
        match self.try_fetch_data(request).await {
            Ok(response) => {
                info!(
                    "Fetched {} rows with {} fields",
                    response.rows.len(),
                    response.schema.len()
                );
                Ok(response)
            }
            Err(e) => {
                let err = UserFacingError::from_error(&e);
                error!("{}", err.debug_text);
                Err(err)
            }
        }
    }

    fn is_diagnostic_mode_enabled(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for SmsConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsConnector")
            .field("registry", &self.registry)
            .field("mapper", &self.mapper)
            .field("decoder", &self.decoder)
            .field("endpoint_secret", &self.endpoint_secret)
            .finish_non_exhaustive()
    }
}
