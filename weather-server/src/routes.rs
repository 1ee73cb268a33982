//! Axum route handlers.
//!
//! # Routes
//!
//! - `GET /weather/{cep}` — Current temperature for a postal code in °C, °F and K
//! - `ANY /health`        — Liveness probe, always `OK`

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{MethodRouter, any, get},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use weather_core::{ErrorResponse, ServiceError, Stage, WeatherError, WeatherService};

/// Shared application state for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
}

impl AppState {
    pub fn new(service: Arc<WeatherService>) -> Self {
        Self { service }
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", any(health_handler))
        .route("/weather/", get_only(get(empty_zipcode_handler)))
        .route("/weather/{*zipcode}", get_only(get(weather_handler)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// `get` would also answer HEAD through the GET handler.
fn get_only(router: MethodRouter<AppState>) -> MethodRouter<AppState> {
    router.head(method_not_allowed).fallback(method_not_allowed)
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// GET /weather/{cep}
///
/// A segment that does not decode (e.g. invalid UTF-8) is a malformed code.
async fn weather_handler(
    State(state): State<AppState>,
    zipcode: Result<Path<String>, PathRejection>,
) -> Response {
    match zipcode {
        Ok(Path(zipcode)) => respond_for(&state, zipcode.trim()).await,
        Err(rejection) => {
            warn!(%rejection, "undecodable zipcode segment");
            respond_for(&state, "").await
        }
    }
}

/// GET /weather/ with nothing after the slash.
async fn empty_zipcode_handler(State(state): State<AppState>) -> Response {
    respond_for(&state, "").await
}

async fn respond_for(state: &AppState, zipcode: &str) -> Response {
    match state.service.temperature_for(zipcode).await {
        Ok(temperature) => json_response(StatusCode::OK, &temperature),
        Err(err) => error_response(&err),
    }
}

/// Status and message reported to the client for a pipeline failure.
pub fn status_for(err: &ServiceError) -> (StatusCode, &'static str) {
    match err.stage {
        Stage::Validation => (StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode"),
        Stage::Lookup if err.error.is_not_found() => (StatusCode::NOT_FOUND, "can not find zipcode"),
        Stage::Lookup => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        Stage::Weather => (StatusCode::INTERNAL_SERVER_ERROR, "error fetching weather data"),
    }
}

fn error_response(err: &ServiceError) -> Response {
    let (status, message) = status_for(err);
    if status.is_server_error() {
        error!(error = %err, source = ?err.error, "request failed");
    } else {
        warn!(error = %err, "request rejected");
    }
    json_response(status, &ErrorResponse::new(message))
}

/// Serialize `payload` as the JSON body. An encoding failure becomes a 500
/// with a fixed body instead.
fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            error!(error = %WeatherError::from(e), "response encoding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/json")],
                r#"{"message":"internal server error"}"#,
            )
                .into_response()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
