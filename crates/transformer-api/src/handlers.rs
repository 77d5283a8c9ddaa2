//! API request handlers for code transformation

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use niceobf_common::{ContentType, TransformResult};
use std::sync::Arc;
use tracing::{error, info, info_span, warn};
use uuid::Uuid;

use crate::models::{Envelope, FeatureFlags, HealthInfo, MemoryUsage, TransformRequest};
use crate::AppState;

pub const SERVICE_NAME: &str = "NICE-OBF API";

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub kind: &'static str,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            kind: "VALIDATION_ERROR",
        }
    }

    pub fn method_not_allowed() -> Self {
        ApiError {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: "Method not allowed".to_string(),
            kind: "METHOD_NOT_ALLOWED",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Envelope::<()>::error(self.message, Some(self.kind));

        (self.status, Json(body)).into_response()
    }
}

impl From<niceobf_common::Error> for ApiError {
    fn from(err: niceobf_common::Error) -> Self {
        use niceobf_common::Error;

        let (status, kind) = match &err {
            Error::Validation(_) | Error::Options(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Error::UnsupportedType(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_TYPE"),
            Error::Backend { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "TRANSFORM_ERROR"),
        };

        ApiError {
            status,
            message: err.to_string(),
            kind,
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError {
            status: rejection.status(),
            message: rejection.body_text(),
            kind: "VALIDATION_ERROR",
        }
    }
}

/// Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Envelope<HealthInfo>> {
    let uptime = Utc::now().signed_duration_since(state.started_at);

    Json(Envelope::ok(HealthInfo {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        environment: state.environment.clone(),
        uptime: uptime.num_milliseconds() as f64 / 1000.0,
        memory: memory_snapshot(),
        features: FeatureFlags::STATELESS,
    }))
}

/// Transform source code with the back-end of its declared type
pub async fn transform_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Envelope<TransformResult>>, ApiError> {
    let body = body?;

    let payload: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected request with invalid JSON: {}", e);
        ApiError::bad_request(format!("Invalid JSON body: {}", e))
    })?;

    let request: TransformRequest = serde_json::from_value(payload).map_err(|e| {
        warn!("Rejected malformed request: {}", e);
        ApiError::bad_request(format!("Invalid request body: {}", e))
    })?;

    let (code, kind) = match (request.code, request.kind) {
        (Some(code), Some(kind)) if !code.is_empty() && !kind.is_empty() => (code, kind),
        _ => {
            warn!("Rejected request without code or type");
            return Err(ApiError::bad_request("code and type are required"));
        }
    };

    let kind: ContentType = kind.parse().map_err(|e: niceobf_common::Error| {
        warn!("{}", e);
        ApiError::from(e)
    })?;

    let request_id = Uuid::new_v4();
    info!(%request_id, kind = kind.as_str(), size = code.len(), "Transforming code");

    let span = info_span!("transform", %request_id);
    let dispatcher = state.dispatcher.clone();
    let options = request.options;
    let outcome = tokio::task::spawn_blocking(move || {
        span.in_scope(|| dispatcher.transform(&code, kind, &options))
    })
    .await
    .map_err(|e| {
        error!(%request_id, "Transformation task failed: {}", e);
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Transformation task failed: {}", e),
            kind: "TRANSFORM_ERROR",
        }
    })?;

    match outcome {
        Ok(result) => Ok(Json(Envelope::ok(result))),
        Err(e) => {
            let err = ApiError::from(e);
            if err.status.is_server_error() {
                error!(%request_id, "{}", err.message);
            } else {
                warn!(%request_id, "{}", err.message);
            }
            Err(err)
        }
    }
}

/// Wrong method on a known route
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::method_not_allowed()
}

/// Unknown route
pub async fn not_found_handler() -> ApiError {
    ApiError {
        status: StatusCode::NOT_FOUND,
        message: "Not found".to_string(),
        kind: "NOT_FOUND",
    }
}

/// Resident memory of this process next to the host total, in megabytes.
/// Either figure falls back to zero where the platform does not expose it.
fn memory_snapshot() -> MemoryUsage {
    const MB: u64 = 1024 * 1024;

    let used = match memory_stats::memory_stats() {
        Some(stats) => stats.physical_mem as u64 / MB,
        None => {
            warn!("Failed to read process memory");
            0
        }
    };

    let total = match sys_info::mem_info() {
        // sys-info reports kilobytes
        Ok(mem) => mem.total / 1024,
        Err(e) => {
            warn!("Failed to read host memory info: {}", e);
            0
        }
    };

    MemoryUsage { used, total }
}
