//! HTTP routes and handlers

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::time::Instant;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{debug, info, warn};

use scamcheck_core::{Error, Verdict};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);
    let body_limit = RequestBodyLimitLayer::new(state.config.max_body_bytes);

    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/stats", get(stats))
        .route("/metrics", get(metrics))
        .route("/predict", post(predict))
        .fallback(fallback)
        .layer(cors)
        .layer(body_limit)
        .with_state(state)
}

fn build_cors_layer(state: &AppState) -> CorsLayer {
    if state.config.allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn service_info() -> impl IntoResponse {
    Json(json!({
        "service": "Scamcheck Detection API",
        "status": "running",
        "endpoints": {
            "/health": "GET",
            "/stats": "GET",
            "/metrics": "GET",
            "/predict": "POST"
        }
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.snapshot())
}

async fn metrics(State(state): State<AppState>) -> String {
    state
        .prometheus
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default()
}

/// Prediction request body
#[derive(Debug, Deserialize)]
struct PredictRequest {
    message: Option<String>,
}

/// Main prediction handler
async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<Verdict>, AppError> {
    metrics::counter!("scamcheck_requests_total").increment(1);
    state.metrics.record_request();

    let message = req.message.ok_or_else(|| {
        AppError::InvalidInput("missing 'message' field in request body".to_string())
    })?;
    debug!(length = message.len(), "received prediction request");

    let start = Instant::now();
    let verdict = state.pipeline.decide(&message).await.map_err(|e| {
        warn!("prediction failed: {e}");
        metrics::counter!("scamcheck_errors_total").increment(1);
        if matches!(e, Error::Model(_)) {
            state.metrics.record_model_failure();
        }
        AppError::from(e)
    })?;

    state
        .metrics
        .record_latency(start.elapsed().as_micros() as u64);
    state.metrics.record_verdict(verdict.label);
    metrics::counter!("scamcheck_verdicts_total", "label" => verdict.label.as_str()).increment(1);

    info!(
        prediction = %verdict.label,
        confidence = verdict.confidence,
        "verdict issued"
    );
    Ok(Json(verdict))
}

async fn fallback() -> AppError {
    AppError::NotFound
}

/// Error handling
#[derive(Debug)]
pub enum AppError {
    InvalidInput(String),
    ModelUnavailable(String),
    Internal(String),
    NotFound,
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => AppError::InvalidInput(msg),
            Error::Model(msg) => AppError::ModelUnavailable(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "invalid_input", msg),
            AppError::ModelUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "model_unavailable", msg)
            }
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                "unknown endpoint".to_string(),
            ),
        };

        let body = json!({
            "error": {
                "type": kind,
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}
