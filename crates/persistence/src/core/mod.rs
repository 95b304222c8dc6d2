//! Core storage traits and abstractions.
//!
//! - [`KeyValueStore`] - The command set every backend provides
//! - [`BackendKind`] - Backend identification
//!
//! # Example: Implementing a Store Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use hms_persistence::core::{BackendKind, KeyValueStore};
//! use hms_persistence::error::StorageResult;
//!
//! struct MyStore {
//!     // ... backend-specific fields
//! }
//!
//! #[async_trait]
//! impl KeyValueStore for MyStore {
//!     fn kind(&self) -> BackendKind {
//!         BackendKind::Custom("my-store")
//!     }
//!
//!     async fn get(&self, key: &str) -> StorageResult<Option<String>> {
//!         todo!()
//!     }
//!
//!     // ... implement other required methods
//! }
//! ```

pub mod backend;
pub mod store;

pub use backend::BackendKind;
pub use store::KeyValueStore;
