//! Server configuration for the hospital records API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HMS_SERVER_PORT` | 8888 | Server port |
//! | `HMS_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `HMS_LOG_LEVEL` | info | Log level |
//! | `HMS_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `HMS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `HMS_ENABLE_CORS` | true | Enable CORS |
//! | `HMS_CORS_ORIGINS` | * | Allowed origins |
//! | `HMS_CORS_METHODS` | GET,POST,OPTIONS | Allowed methods |
//! | `HMS_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `HMS_STORAGE_BACKEND` | redis | Storage backend (`redis` or `memory`) |
//! | `REDIS_HOST` | localhost | Redis host |
//! | `REDIS_PORT` | 6379 | Redis port |
//! | `REDIS_DB` | 0 | Redis logical database |
//! | `REDIS_POOL_SIZE` | 16 | Redis connection pool size |
//! | `REDIS_CONNECTION_TIMEOUT_MS` | 2000 | Pool checkout timeout (ms) |
//!
//! # Example
//!
//! ```rust
//! use hms_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use std::fmt;
use std::str::FromStr;

use clap::Parser;

/// Which key-value store backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackendMode {
    /// A Redis server.
    Redis,
    /// An in-process store; contents are lost on exit.
    Memory,
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendMode::Redis => write!(f, "redis"),
            StorageBackendMode::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageBackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(StorageBackendMode::Redis),
            "memory" => Ok(StorageBackendMode::Memory),
            other => Err(format!(
                "unknown storage backend '{}' (expected 'redis' or 'memory')",
                other
            )),
        }
    }
}

/// Server configuration for the hospital records API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "hms")]
#[command(about = "Hospital records HTTP service")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "HMS_SERVER_PORT", default_value = "8888")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "HMS_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "HMS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "HMS_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "HMS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "HMS_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "HMS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated).
    #[arg(long, env = "HMS_CORS_METHODS", default_value = "GET,POST,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated).
    #[arg(long, env = "HMS_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// Storage backend (redis or memory).
    #[arg(long, env = "HMS_STORAGE_BACKEND", default_value = "redis")]
    pub storage_backend: String,

    /// Redis host.
    #[arg(long, env = "REDIS_HOST", default_value = "localhost")]
    pub redis_host: String,

    /// Redis port.
    #[arg(long, env = "REDIS_PORT", default_value = "6379")]
    pub redis_port: u16,

    /// Redis logical database index.
    #[arg(long, env = "REDIS_DB", default_value = "0")]
    pub redis_db: i64,

    /// Maximum number of pooled Redis connections.
    #[arg(long, env = "REDIS_POOL_SIZE", default_value = "16")]
    pub redis_pool_size: u32,

    /// How long to wait for a pooled Redis connection, in milliseconds.
    #[arg(long, env = "REDIS_CONNECTION_TIMEOUT_MS", default_value = "2000")]
    pub redis_connection_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8888,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            storage_backend: "redis".to_string(),
            redis_host: "localhost".to_string(),
            redis_port: 6379,
            redis_db: 0,
            redis_pool_size: 16,
            redis_connection_timeout_ms: 2000,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured storage backend.
    pub fn storage_backend_mode(&self) -> Result<StorageBackendMode, String> {
        self.storage_backend.parse()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if let Err(e) = self.storage_backend_mode() {
            errors.push(format!("Invalid storage backend: {}", e));
        }

        if self.redis_port == 0 {
            errors.push("Redis port cannot be 0".to_string());
        }

        if self.redis_db < 0 {
            errors.push("Redis database index cannot be negative".to_string());
        }

        if self.redis_pool_size == 0 {
            errors.push("Redis pool size cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, the in-memory backend, and disables CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            storage_backend: "memory".to_string(),
            redis_connection_timeout_ms: 200,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8888);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.max_body_size, 1_048_576);
        assert!(config.enable_cors);
        assert_eq!(config.storage_backend_mode(), Ok(StorageBackendMode::Redis));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_reports_every_error() {
        let config = ServerConfig {
            request_timeout: 0,
            storage_backend: "postgres".to_string(),
            redis_pool_size: 0,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("postgres")));
    }

    #[test]
    fn test_storage_backend_mode_parsing() {
        assert_eq!(
            "Memory".parse::<StorageBackendMode>(),
            Ok(StorageBackendMode::Memory)
        );
        assert_eq!(
            " redis ".parse::<StorageBackendMode>(),
            Ok(StorageBackendMode::Redis)
        );
        assert!("sqlite".parse::<StorageBackendMode>().is_err());
        assert_eq!(StorageBackendMode::Memory.to_string(), "memory");
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.storage_backend_mode(), Ok(StorageBackendMode::Memory));
    }
}
