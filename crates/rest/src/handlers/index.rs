//! Service index handler.
//!
//! `GET [base]/`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use hms_persistence::core::KeyValueStore;
use hms_persistence::types::EntityKind;
use tracing::debug;

use crate::state::AppState;

/// Handler for the service index.
///
/// Lists the service's endpoints.
pub async fn index_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: KeyValueStore + Send + Sync,
{
    debug!("Processing index request");

    let entities: Vec<_> = EntityKind::ALL
        .iter()
        .map(|kind| {
            serde_json::json!({
                "name": kind.as_str(),
                "path": format!("/{}", kind),
                "fields": kind.schema().fields,
                "required": kind.schema().required,
            })
        })
        .collect();

    Json(serde_json::json!({
        "service": "hms",
        "version": crate::VERSION,
        "backend": state.backend_name(),
        "entities": entities,
        "endpoints": [
            "/doctor-patient",
            "/analytics",
            "/health",
            "/_liveness",
            "/_readiness"
        ]
    }))
    .into_response()
}
