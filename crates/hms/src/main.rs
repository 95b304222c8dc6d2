//! Hospital records service.
//!
//! Serves hospitals, doctors, patients, diagnoses, doctor-patient links and
//! analytics over HTTP, backed by Redis or an in-process store.

use std::sync::Arc;

use clap::Parser;
use hms_persistence::backends::memory::MemoryBackend;
use hms_persistence::core::KeyValueStore;
use hms_persistence::repository::EntityRepository;
use hms_rest::{ServerConfig, StorageBackendMode, create_app_with_shared, init_logging};
use tracing::{info, warn};

#[cfg(feature = "redis")]
use hms_persistence::backends::redis::{RedisBackend, RedisBackendConfig};

/// Creates a Redis backend from the server configuration.
#[cfg(feature = "redis")]
fn create_redis_backend(config: &ServerConfig) -> anyhow::Result<RedisBackend> {
    let backend_config = RedisBackendConfig {
        host: config.redis_host.clone(),
        port: config.redis_port,
        db: config.redis_db,
        max_connections: config.redis_pool_size,
        connection_timeout_ms: config.redis_connection_timeout_ms,
        ..Default::default()
    };

    info!(
        host = %backend_config.host,
        port = backend_config.port,
        db = backend_config.db,
        "Initializing Redis backend"
    );

    Ok(RedisBackend::new(backend_config)?)
}

/// Seeds the keyspace. An unreachable store is logged and left for request
/// time, where it is reported to clients.
async fn seed<S: KeyValueStore>(store: &Arc<S>) -> anyhow::Result<()> {
    match EntityRepository::new(Arc::clone(store)).seed().await {
        Ok(true) => info!("Keyspace initialised"),
        Ok(false) => info!("Keyspace already initialised"),
        Err(e) if e.is_connectivity() => {
            warn!(error = %e, "Store unreachable, skipping seeding");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Resolves when the process is asked to stop.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

/// Seeds the store, then serves until shutdown.
async fn start<S: KeyValueStore + 'static>(store: S, config: ServerConfig) -> anyhow::Result<()> {
    let store = Arc::new(store);
    seed(&store).await?;
    let app = create_app_with_shared(store, config.clone());
    serve(app, &config).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_mode = config
        .storage_backend_mode()
        .map_err(|e| anyhow::anyhow!("Invalid storage backend configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %backend_mode,
        "Starting hospital records service"
    );

    match backend_mode {
        StorageBackendMode::Redis => start_redis(config).await,
        StorageBackendMode::Memory => {
            warn!("Using the in-memory store; records are lost on exit");
            start(MemoryBackend::new(), config).await
        }
    }
}

/// Starts the server with the Redis backend.
#[cfg(feature = "redis")]
async fn start_redis(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_redis_backend(&config)?;
    start(backend, config).await
}

/// Fallback when the redis feature is not enabled.
#[cfg(not(feature = "redis"))]
async fn start_redis(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The redis backend requires the 'redis' feature. \
         Build with: cargo build -p hms --features redis"
    )
}
