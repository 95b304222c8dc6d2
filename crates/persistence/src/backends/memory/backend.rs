//! In-memory backend state.

use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::Fields;

/// A value held under a key.
#[derive(Debug, Clone)]
pub(super) enum Entry {
    Scalar(String),
    Hash(Fields),
    Set(BTreeSet<String>),
}

/// In-process key-value store.
pub struct MemoryBackend {
    pub(super) entries: RwLock<HashMap<String, Entry>>,
    available: AtomicBool,
}

impl Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBackend")
            .field("keys", &self.entries.read().len())
            .field("available", &self.is_available())
            .finish()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Simulates the store going away (`false`) or coming back (`true`).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Returns whether commands are currently accepted.
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Returns the number of keys held.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true when no key is held.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub(super) fn ensure_available(&self) -> StorageResult<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "memory".to_string(),
                message: "Connection refused".to_string(),
            }))
        }
    }
}

pub(super) fn wrong_type(key: &str) -> StorageError {
    StorageError::Backend(BackendError::CommandError {
        backend_name: "memory".to_string(),
        message: format!(
            "WRONGTYPE Operation against a key holding the wrong kind of value: {}",
            key
        ),
    })
}

pub(super) fn not_an_integer(key: &str) -> StorageError {
    StorageError::Backend(BackendError::CommandError {
        backend_name: "memory".to_string(),
        message: format!("ERR value is not an integer or out of range: {}", key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_backend_is_empty_and_available() {
        let backend = MemoryBackend::new();
        assert!(backend.is_empty());
        assert!(backend.is_available());
    }

    #[test]
    fn test_unavailable_backend_reports_connectivity_error() {
        let backend = MemoryBackend::new();
        backend.set_available(false);

        let err = backend.ensure_available().unwrap_err();
        assert!(err.is_connectivity());

        backend.set_available(true);
        assert!(backend.ensure_available().is_ok());
    }
}
