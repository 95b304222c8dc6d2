//! Entity records and doctor-patient links.
//!
//! [`EntityRepository`] implements creation, listing and linking for every
//! [`EntityKind`](crate::types::EntityKind) against any
//! [`KeyValueStore`](crate::core::KeyValueStore). The per-kind rules live
//! in [`EntitySchema`] values rather than in per-kind code.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use hms_persistence::backends::memory::MemoryBackend;
//! use hms_persistence::repository::EntityRepository;
//! use hms_persistence::types::EntityKind;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = EntityRepository::new(Arc::new(MemoryBackend::new()));
//! repo.seed().await?;
//!
//! let form: HashMap<String, String> = [
//!     ("name".to_string(), "St. Mary".to_string()),
//!     ("address".to_string(), "1 Main St".to_string()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let created = repo.create(EntityKind::Hospital, &form).await?;
//! assert_eq!(created.message(), "OK: ID 1 for St. Mary");
//! # Ok(())
//! # }
//! ```

mod entities;
mod schema;

pub use entities::EntityRepository;
pub use schema::{
    DisplayRule, EntitySchema, FieldConstraint, ReferenceCheck, ReferencePolicy, field_value,
};
