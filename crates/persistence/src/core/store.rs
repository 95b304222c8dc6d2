//! Key-value store client trait.
//!
//! This module defines the [`KeyValueStore`] trait: the small set of commands
//! the service needs from its backing store. Each command must be atomic on
//! its own; nothing above this trait assumes multi-command atomicity.

use async_trait::async_trait;

use crate::error::StorageResult;

use super::BackendKind;
use crate::types::Fields;

/// Commands the service issues against its key-value store.
///
/// The command set mirrors a Redis subset: scalar get/set/increment, hash
/// read-all and set-field, and set add/members/cardinality. Implementations
/// are shared across requests behind an `Arc`, so every method takes `&self`.
///
/// # Example
///
/// ```ignore
/// use hms_persistence::core::KeyValueStore;
///
/// async fn next_id<S: KeyValueStore>(store: &S) -> StorageResult<i64> {
///     Ok(store.incr("hospital:autoID").await? - 1)
/// }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the kind of this storage backend.
    fn kind(&self) -> BackendKind;

    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Checks that the store is reachable.
    async fn ping(&self) -> StorageResult<()>;

    /// Reads a scalar value.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes a scalar value, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Writes a scalar value only when the key is absent.
    ///
    /// Returns `true` when the value was written.
    async fn set_if_absent(&self, key: &str, value: &str) -> StorageResult<bool>;

    /// Atomically increments an integer scalar by one and returns the new
    /// value. An absent key counts as 0.
    async fn incr(&self, key: &str) -> StorageResult<i64>;

    /// Reads every field of a hash. An absent key yields an empty mapping.
    async fn hgetall(&self, key: &str) -> StorageResult<Fields>;

    /// Sets one hash field.
    ///
    /// Returns `true` when the field was newly created and `false` when an
    /// existing field was overwritten.
    async fn hset(&self, key: &str, field: &str, value: &str) -> StorageResult<bool>;

    /// Adds a member to a set.
    ///
    /// Returns `true` when the member was not already present.
    async fn sadd(&self, key: &str, member: &str) -> StorageResult<bool>;

    /// Reads every member of a set. An absent key yields an empty list.
    async fn smembers(&self, key: &str) -> StorageResult<Vec<String>>;

    /// Returns the number of members of a set.
    async fn scard(&self, key: &str) -> StorageResult<u64>;
}
