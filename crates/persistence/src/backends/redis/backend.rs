//! Redis backend implementation.

use std::fmt::Debug;
use std::time::Duration;

use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::{Pool, PooledConnection, RunError};
use bb8_redis::redis::RedisError;
use serde::{Deserialize, Serialize};

use crate::error::{BackendError, StorageError, StorageResult};

/// Redis backend for record storage.
pub struct RedisBackend {
    pool: Pool<RedisConnectionManager>,
    config: RedisBackendConfig,
}

impl Debug for RedisBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisBackend")
            .field("host", &self.config.host)
            .field("port", &self.config.port)
            .field("db", &self.config.db)
            .field("pool", &self.pool.state())
            .finish_non_exhaustive()
    }
}

/// Configuration for the Redis backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisBackendConfig {
    /// Server host name.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logical database index.
    #[serde(default)]
    pub db: i64,

    /// Optional password (AUTH).
    #[serde(default)]
    pub password: Option<String>,

    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection checkout timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    6379
}

fn default_max_connections() -> u32 {
    16
}

fn default_connection_timeout_ms() -> u64 {
    2000
}

impl Default for RedisBackendConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            db: 0,
            password: None,
            max_connections: default_max_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
        }
    }
}

impl RedisBackendConfig {
    /// Returns the connection URL for this configuration.
    pub fn url(&self) -> String {
        match &self.password {
            Some(password) => format!(
                "redis://:{}@{}:{}/{}",
                password, self.host, self.port, self.db
            ),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}

impl RedisBackend {
    /// Creates a backend with the given configuration.
    ///
    /// No connection is opened here; the pool connects on first use. Must be
    /// called from within a Tokio runtime, which hosts the pool's reaper task.
    pub fn new(config: RedisBackendConfig) -> StorageResult<Self> {
        let manager = RedisConnectionManager::new(config.url()).map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "redis".to_string(),
                message: e.to_string(),
            })
        })?;

        let pool = Pool::builder()
            .max_size(config.max_connections)
            .connection_timeout(Duration::from_millis(config.connection_timeout_ms))
            .build_unchecked(manager);

        Ok(Self { pool, config })
    }

    /// Checks a connection out of the pool.
    pub(super) async fn connection(
        &self,
    ) -> StorageResult<PooledConnection<'_, RedisConnectionManager>> {
        self.pool.get().await.map_err(pool_error)
    }
}

/// Maps a Redis client error, separating "cannot reach the server" from
/// command failures.
pub(super) fn redis_error(err: RedisError) -> StorageError {
    if err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_io_error()
        || err.is_timeout()
    {
        StorageError::Backend(BackendError::ConnectionFailed {
            backend_name: "redis".to_string(),
            message: err.to_string(),
        })
    } else {
        StorageError::Backend(BackendError::CommandError {
            backend_name: "redis".to_string(),
            message: err.to_string(),
        })
    }
}

fn pool_error(err: RunError<RedisError>) -> StorageError {
    match err {
        RunError::User(err) => redis_error(err),
        RunError::TimedOut => StorageError::Backend(BackendError::ConnectionFailed {
            backend_name: "redis".to_string(),
            message: "timed out waiting for a pooled connection".to_string(),
        }),
    }
}
