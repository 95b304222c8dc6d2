//! Doctor-patient link handlers.
//!
//! `GET [base]/doctor-patient` and `POST [base]/doctor-patient`.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use hms_persistence::core::KeyValueStore;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::FormFields;
use crate::state::AppState;

/// Handler for listing every doctor's linked patients.
///
/// # Response
///
/// - `200 OK` - JSON object from doctor id to its patient ids
/// - `400 Bad Request` - The store cannot be reached
pub async fn list_links_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: KeyValueStore + Send + Sync,
{
    debug!("Processing link list request");

    let links = state.repository().links().await?;
    Ok(Json(links).into_response())
}

/// Handler for linking a patient to a doctor.
///
/// Expects `doctor_ID` and `patient_ID` form fields.
///
/// # Response
///
/// - `200 OK` - `OK: doctor ID: <id>, patient ID: <id>`
/// - `400 Bad Request` - Missing or unknown ids, or the store cannot be reached
pub async fn create_link_handler<S>(
    State(state): State<AppState<S>>,
    form: FormFields,
) -> RestResult<Response>
where
    S: KeyValueStore + Send + Sync,
{
    let doctor_id = form.field("doctor_ID");
    let patient_id = form.field("patient_ID");
    debug!(doctor_id, patient_id, "Processing link request");

    let link = state.repository().link(doctor_id, patient_id).await?;
    Ok(link.message().into_response())
}
