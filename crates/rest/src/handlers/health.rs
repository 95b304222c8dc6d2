//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and load
//! balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hms_persistence::core::KeyValueStore;
use tracing::{debug, warn};

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Reports the process as up without touching the store.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: KeyValueStore + Send + Sync,
{
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// Pings the store.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
///
/// # Response
///
/// - `200 OK` - The store answered
/// - `503 Service Unavailable` - The store did not answer
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: KeyValueStore + Send + Sync,
{
    debug!("Processing readiness check request");

    let (status, ready, storage) = match state.store().ping().await {
        Ok(()) => (StatusCode::OK, "ready", "ok".to_string()),
        Err(e) => {
            warn!(error = %e, "Store not ready");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable", e.to_string())
        }
    };

    let response = serde_json::json!({
        "status": ready,
        "backend": state.backend_name(),
        "checks": {
            "storage": storage
        }
    });

    Ok((status, Json(response)).into_response())
}
