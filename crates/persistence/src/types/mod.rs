//! Core types for the persistence layer.
//!
//! - [`EntityKind`] and the key helpers describe the keyspace layout
//! - [`StoredRecord`] is a record read back with its id
//! - [`CreatedRecord`], [`CreatedLink`] describe successful writes

mod keyspace;
mod record;

pub use keyspace::{DB_INITIATED_KEY, EntityKind, FIRST_ID, LINK_PREFIX, link_key};
pub use record::{CreatedLink, CreatedRecord, Fields, StoredRecord};
