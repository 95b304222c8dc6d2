//! Route configuration.
//!
//! Defines all routes for the hospital records API.

use axum::{Router, routing::get};
use hms_persistence::core::KeyValueStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// ## Service
/// - `GET /` - Service index
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Records
/// - `GET /doctor-patient` - List links
/// - `POST /doctor-patient` - Link a patient to a doctor
/// - `GET /analytics` - Analytics report
/// - `GET /{entity}` - List records
/// - `POST /{entity}` - Create a record
///
/// The fixed paths take precedence over `/{entity}`.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: KeyValueStore + Send + Sync + 'static,
{
    Router::new()
        // Service routes
        .route("/", get(handlers::index_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::health::liveness_handler))
        .route("/_readiness", get(handlers::health::readiness_handler::<S>))
        // Record routes
        .route(
            "/doctor-patient",
            get(handlers::list_links_handler::<S>).post(handlers::create_link_handler::<S>),
        )
        .route("/analytics", get(handlers::analytics_handler::<S>))
        .route(
            "/{entity}",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        // State
        .with_state(state)
}
