//! HTTP server mode, exposing the connector entry points to a reporting host

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::connector::{Connector, DataRequest};
use crate::error::{Error, Result, UserFacingError};

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    connector: Arc<dyn Connector>,
}

/// Error body in the host's format
#[derive(Debug, Serialize)]
struct ErrorResponse {
    errors: Vec<HostError>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HostError {
    #[serde(rename = "type")]
    error_type: &'static str,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug_text: Option<String>,
}

/// A failed data fetch, with debug text only in diagnostic mode
struct DataError {
    error: UserFacingError,
    diagnostic: bool,
}

impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            errors: vec![HostError {
                error_type: "USER",
                text: self.error.text,
                debug_text: self.diagnostic.then_some(self.error.debug_text),
            }],
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Build the router for a connector
pub fn router(connector: Arc<dyn Connector>) -> Router {
    let state = AppState { connector };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/auth-type", get(auth_type))
        .route("/config", get(config))
        .route("/schema", post(schema))
        .route("/data", post(data))
        .route("/diagnostics", get(diagnostics))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(connector: Arc<dyn Connector>, port: u16) -> Result<()> {
    let app = router(connector);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

async fn auth_type(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.connector.auth_type())
}

async fn config(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.connector.config())
}

// The host may send its config along; the schema does not depend on it.
async fn schema(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.connector.schema())
}

/// Data fetch endpoint
///
/// The body is parsed here rather than by an extractor, so a malformed request
/// is reported in the same error shape as any other failed fetch.
async fn data(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> std::result::Result<Response, DataError> {
    let diagnostic = state.connector.is_diagnostic_mode_enabled();

    let request: DataRequest = serde_json::from_slice(&body).map_err(|e| {
        let error = UserFacingError::from_error(&Error::decode(format!(
            "Invalid data request: {e}"
        )));
        tracing::error!("{}", error.debug_text);
        DataError { error, diagnostic }
    })?;

    match state.connector.fetch_data(&request).await {
        Ok(response) => Ok(Json(response).into_response()),
        Err(error) => Err(DataError { error, diagnostic }),
    }
}

async fn diagnostics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "enabled": state.connector.is_diagnostic_mode_enabled() }))
}
