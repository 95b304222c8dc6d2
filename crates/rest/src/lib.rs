//! # hms-rest - Hospital Records HTTP API
//!
//! This crate serves hospitals, doctors, patients, diagnoses, doctor-patient
//! links and analytics over HTTP, on top of any
//! [`KeyValueStore`](hms_persistence::core::KeyValueStore).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hms_persistence::backends::memory::MemoryBackend;
//! use hms_rest::{ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(MemoryBackend::new(), config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | list records | GET | `/[entity]` |
//! | create record | POST | `/[entity]` |
//! | list links | GET | `/doctor-patient` |
//! | link | POST | `/doctor-patient` |
//! | analytics | GET | `/analytics` |
//! | index | GET | `/` |
//! | health | GET | `/health`, `/_liveness`, `/_readiness` |
//!
//! `[entity]` is one of `hospital`, `doctor`, `patient` or `diagnosis`.
//! Create requests carry `application/x-www-form-urlencoded` bodies and are
//! answered in plain text; listings and analytics are JSON.
//!
//! ## Error Handling
//!
//! | HTTP Status | Body |
//! |-------------|------|
//! | 400 | The validation message, `Redis connection refused` or `Error retrieving analytics` |
//! | 404 | Unknown entity |
//! | 500 | `Something went terribly wrong` after a partial write |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and their responses
//! - [`config`] - Server configuration
//! - [`state`] - Application state (repository, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method},
};
use hms_persistence::core::KeyValueStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: KeyValueStore + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Arguments
///
/// * `store` - The key-value store to use
/// * `config` - Server configuration
///
/// # Example
///
/// ```rust
/// use hms_persistence::backends::memory::MemoryBackend;
/// use hms_rest::{ServerConfig, create_app_with_config};
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: KeyValueStore + 'static,
{
    create_app_with_shared(Arc::new(store), config)
}

/// Creates the Axum application over a store the caller keeps a handle to.
pub fn create_app_with_shared<S>(store: Arc<S>, config: ServerConfig) -> Router
where
    S: KeyValueStore + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        store.backend_name()
    );

    // Create application state
    let state = AppState::new(store, config.clone());

    // Build the router with all routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer from the configured origin, method and header lists.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(comma_list::<Method>(&config.cors_methods))
        .allow_headers(comma_list::<HeaderName>(&config.cors_headers));

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(comma_list::<HeaderValue>(&config.cors_origins))
    }
}

/// Parses a comma-separated list, skipping entries that do not parse.
fn comma_list<T: FromStr>(list: &str) -> Vec<T> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| item.parse().ok())
        .collect()
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "hms={level},hms_rest={level},hms_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_list_skips_blank_and_invalid_entries() {
        let methods: Vec<Method> = comma_list("GET, POST,,OPTIONS");
        assert_eq!(methods, [Method::GET, Method::POST, Method::OPTIONS]);

        let origins: Vec<HeaderValue> = comma_list("http://a.test, bad\u{7f}origin");
        assert_eq!(origins, [HeaderValue::from_static("http://a.test")]);
    }
}
