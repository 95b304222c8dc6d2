//! Hospital Records Persistence Layer
//!
//! This crate stores hospitals, doctors, patients, diagnoses and
//! doctor-patient links in a key-value store, and computes analytics over
//! them.
//!
//! # Features
//!
//! - **Pluggable Stores**: every operation is written against the
//!   [`KeyValueStore`] trait
//! - **Schema-driven Records**: one repository serves all four entity kinds
//! - **Atomic Ids**: ids come from the store's atomic increment
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hms-persistence = { version = "0.1", features = ["redis"] }
//! ```
//!
//! Available backend features:
//! - `redis` (default) - Redis through a bb8 connection pool
//!
//! The in-memory backend is always available.
//!
//! # Architecture
//!
//! - [`types`] - Keyspace layout and record types
//! - [`error`] - Error types for all operations
//! - [`core`] - The store trait
//! - [`backends`] - Store implementations
//! - [`repository`] - Record creation, listing and linking
//! - [`analytics`] - Aggregate statistics
//!
//! # Keyspace
//!
//! | Key | Type | Holds |
//! |-----|------|-------|
//! | `<kind>:autoID` | string | Next id to assign |
//! | `<kind>:<id>` | hash | Record fields |
//! | `doctor-patient:<doctor_id>` | set | Linked patient ids |
//! | `db_initiated` | string | Set once the counters are seeded |
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use hms_persistence::analytics::AnalyticsReport;
//! use hms_persistence::backends::memory::MemoryBackend;
//! use hms_persistence::repository::EntityRepository;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = EntityRepository::new(Arc::new(MemoryBackend::new()));
//! repo.seed().await?;
//!
//! let report = AnalyticsReport::compute(&repo).await?;
//! assert_eq!(report.total_entities, 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analytics;
pub mod backends;
pub mod core;
pub mod error;
pub mod repository;
pub mod types;

// Re-export commonly used types at crate root
pub use analytics::{AnalyticsReport, HospitalStats};
pub use error::{StorageError, StorageResult};
pub use repository::EntityRepository;
pub use types::{EntityKind, StoredRecord};

// Re-export core traits
pub use core::{BackendKind, KeyValueStore};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
