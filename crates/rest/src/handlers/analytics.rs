//! Analytics handler.
//!
//! `GET [base]/analytics`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use hms_persistence::analytics::AnalyticsReport;
use hms_persistence::core::KeyValueStore;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the analytics report.
///
/// The report is recomputed from the store on every request.
///
/// # Response
///
/// - `200 OK` - JSON report
/// - `400 Bad Request` - `Error retrieving analytics`, whatever went wrong
pub async fn analytics_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: KeyValueStore + Send + Sync,
{
    debug!("Processing analytics request");

    let report = AnalyticsReport::compute(state.repository())
        .await
        .map_err(RestError::analytics)?;

    Ok(Json(report).into_response())
}
