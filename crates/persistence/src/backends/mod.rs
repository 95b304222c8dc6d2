//! Key-value backend implementations.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | always | In-process store for tests and local development |
//! | Redis | `redis` (default) | Pooled connections to a Redis server |
//!
//! # Example
//!
//! ```
//! use hms_persistence::backends::memory::MemoryBackend;
//!
//! let backend = MemoryBackend::new();
//! assert!(backend.is_empty());
//! ```

pub mod memory;

#[cfg(feature = "redis")]
pub mod redis;
