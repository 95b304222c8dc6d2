//! Application state for the hospital records API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the record repository over the injected store, and the
//! server configuration.

use std::sync::Arc;

use hms_persistence::core::KeyValueStore;
use hms_persistence::repository::EntityRepository;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The store type (must implement [`KeyValueStore`])
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use hms_persistence::backends::memory::MemoryBackend;
/// use hms_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::default());
/// assert_eq!(state.backend_name(), "memory");
/// ```
pub struct AppState<S> {
    /// Record access over the store.
    repository: EntityRepository<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: KeyValueStore> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            repository: EntityRepository::new(store),
            config: Arc::new(config),
        }
    }

    /// Returns the record repository.
    pub fn repository(&self) -> &EntityRepository<S> {
        &self.repository
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &S {
        self.repository.store()
    }

    /// Returns the name of the store backend.
    pub fn backend_name(&self) -> &'static str {
        self.store().backend_name()
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
