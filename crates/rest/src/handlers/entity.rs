//! Entity collection handlers.
//!
//! Implements listing and creation for every entity kind:
//! `GET [base]/[entity]` and `POST [base]/[entity]`.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use hms_persistence::core::KeyValueStore;
use hms_persistence::types::EntityKind;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::FormFields;
use crate::state::AppState;

/// Resolves the entity path segment, answering 404 for unknown names.
fn entity_kind(entity: &str) -> RestResult<EntityKind> {
    entity.parse().map_err(|_| RestError::NotFound {
        entity: entity.to_string(),
    })
}

/// Handler for listing every record of a kind.
///
/// # HTTP Request
///
/// `GET [base]/[entity]`
///
/// # Response
///
/// - `200 OK` - JSON array of records in id order, each with its `id`
/// - `400 Bad Request` - The store cannot be reached
/// - `404 Not Found` - Unknown entity
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    Path(entity): Path<String>,
) -> RestResult<Response>
where
    S: KeyValueStore + Send + Sync,
{
    let kind = entity_kind(&entity)?;
    debug!(entity = %kind, "Processing list request");

    let records = state.repository().list(kind).await?;

    debug!(entity = %kind, count = records.len(), "Records listed");
    Ok(Json(records).into_response())
}

/// Handler for creating a record from a submitted form.
///
/// # HTTP Request
///
/// `POST [base]/[entity]` with an `application/x-www-form-urlencoded` body
///
/// # Response
///
/// - `200 OK` - `OK: ID <id> for <name>`
/// - `400 Bad Request` - Validation failure or the store cannot be reached
/// - `404 Not Found` - Unknown entity
/// - `500 Internal Server Error` - The record was only partly written
///
/// # Example
///
/// ```http
/// POST /hospital HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// name=St.+Mary&address=1+Main+St&phone=555-0100&beds_number=120
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    Path(entity): Path<String>,
    form: FormFields,
) -> RestResult<Response>
where
    S: KeyValueStore + Send + Sync,
{
    let kind = entity_kind(&entity)?;
    debug!(entity = %kind, fields = form.0.len(), "Processing create request");

    let created = state.repository().create(kind, &form.0).await?;

    debug!(entity = %kind, id = created.id, "Record created");
    Ok(created.message().into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_resolution() {
        assert_eq!(entity_kind("doctor").unwrap(), EntityKind::Doctor);
        assert!(matches!(
            entity_kind("nurse"),
            Err(RestError::NotFound { .. })
        ));
    }
}
