//! Error types for the persistence layer.
//!
//! This module defines all error types used throughout the persistence layer,
//! following a hierarchy that separates input validation, write integrity and
//! backend (store) failures.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::types::EntityKind;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Input rejected before any write was attempted
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Write integrity errors
    #[error(transparent)]
    Write(#[from] WriteError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns true when the store could not be reached at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            StorageError::Backend(BackendError::ConnectionFailed { .. })
        )
    }
}

/// Errors raised while validating submitted form fields.
///
/// The `message` of each variant is the human-readable text returned to
/// clients verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are missing or empty.
    #[error("{message}")]
    MissingRequiredFields { entity: EntityKind, message: String },

    /// A field holds a value outside its allowed set.
    #[error("{message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// A field references a record that does not exist.
    #[error("{message}")]
    DanglingReference {
        field: String,
        target: EntityKind,
        value: String,
        message: String,
    },
}

impl ValidationError {
    /// Returns the client-facing message.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::MissingRequiredFields { message, .. }
            | ValidationError::InvalidValue { message, .. }
            | ValidationError::DanglingReference { message, .. } => message,
        }
    }
}

/// Errors related to record writes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// Fewer field writes reported success than the schema expects.
    /// Fields already written are left in place.
    #[error("partial write to {key}: {written} of {expected} fields stored")]
    Partial {
        key: String,
        expected: usize,
        written: usize,
    },
}

/// Errors originating from the key-value backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Command execution error (wrong type, protocol error, ...).
    #[error("command failed on {backend_name}: {message}")]
    CommandError {
        backend_name: String,
        message: String,
    },

    /// A stored value could not be interpreted.
    #[error("corrupt value at {key}: {message}")]
    CorruptValue { key: String, message: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
