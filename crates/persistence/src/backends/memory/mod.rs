//! In-memory backend implementation.
//!
//! An in-process key-value store with the same command semantics as the
//! Redis backend. It is the backend used by tests and by local development
//! runs that do not have a Redis server at hand.
//!
//! # Example
//!
//! ```
//! use hms_persistence::backends::memory::MemoryBackend;
//! use hms_persistence::core::KeyValueStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = MemoryBackend::new();
//! assert_eq!(backend.incr("hospital:autoID").await?, 1);
//! assert!(backend.hset("hospital:0", "name", "St. Mary").await?);
//! # Ok(())
//! # }
//! ```
//!
//! # Outage simulation
//!
//! [`MemoryBackend::set_available`] makes every command fail with a
//! connection error until availability is restored, which lets the
//! connectivity error path be exercised without a real server.

mod backend;
mod storage;

pub use backend::MemoryBackend;
