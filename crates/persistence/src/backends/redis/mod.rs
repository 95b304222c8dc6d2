//! Redis backend implementation.
//!
//! Commands are issued over pooled multiplexed connections (`bb8-redis`).
//! The pool is built lazily: a server that is down at startup only surfaces
//! as connection errors on the requests that need it.
//!
//! # Example
//!
//! ```no_run
//! use hms_persistence::backends::redis::{RedisBackend, RedisBackendConfig};
//! use hms_persistence::core::KeyValueStore;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = RedisBackend::new(RedisBackendConfig {
//!     host: "redis.internal".to_string(),
//!     ..Default::default()
//! })?;
//! backend.ping().await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod storage;

pub use backend::{RedisBackend, RedisBackendConfig};
