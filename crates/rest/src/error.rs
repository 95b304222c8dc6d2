//! Error types for the hospital records API.
//!
//! Every failure is answered with a plain-text body; clients match on the
//! exact wording.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer map to HTTP status codes:
//!
//! | Storage Error | HTTP Status | Body |
//! |--------------|-------------|------|
//! | Backend `ConnectionFailed` | 400 | `Redis connection refused` |
//! | Validation | 400 | The validation message |
//! | Partial write | 500 | `Something went terribly wrong` |
//! | Other backend errors | 500 | `Internal error` |
//!
//! Analytics failures of any kind answer 400 `Error retrieving analytics`.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hms_persistence::error::{BackendError, StorageError, WriteError};
use tracing::{error, warn};

/// Body sent when the store cannot be reached.
pub const CONNECTION_REFUSED: &str = "Redis connection refused";

/// Body sent when a record was only partly written.
pub const PARTIAL_WRITE: &str = "Something went terribly wrong";

/// Body sent when analytics could not be computed.
pub const ANALYTICS_FAILED: &str = "Error retrieving analytics";

/// Body sent for any other internal failure.
pub const INTERNAL_ERROR: &str = "Internal error";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// The store could not be reached (HTTP 400).
    StoreUnavailable {
        /// Details from the backend, logged but not sent.
        message: String,
    },

    /// The submitted form was rejected (HTTP 400).
    BadRequest {
        /// Message sent to the client.
        message: String,
    },

    /// A record was left partly written (HTTP 500).
    PartialWrite {
        /// Details of the failed write, logged but not sent.
        message: String,
    },

    /// Analytics could not be computed (HTTP 400).
    Analytics {
        /// Details of the failure, logged but not sent.
        message: String,
    },

    /// No such entity collection (HTTP 404).
    NotFound {
        /// The requested path segment.
        entity: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Details of the failure, logged but not sent.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::StoreUnavailable { message } => {
                write!(f, "Store unavailable: {}", message)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::PartialWrite { message } => {
                write!(f, "Partial write: {}", message)
            }
            RestError::Analytics { message } => {
                write!(f, "Analytics failed: {}", message)
            }
            RestError::NotFound { entity } => {
                write!(f, "Unknown entity: {}", entity)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Wraps any error raised while computing analytics.
    pub fn analytics(err: impl fmt::Display) -> Self {
        RestError::Analytics {
            message: err.to_string(),
        }
    }

    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::StoreUnavailable { .. }
            | RestError::BadRequest { .. }
            | RestError::Analytics { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::PartialWrite { .. } | RestError::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let body = match &self {
            RestError::StoreUnavailable { message } => {
                error!(error = %message, "Store unreachable");
                CONNECTION_REFUSED.to_string()
            }
            RestError::BadRequest { message } => {
                warn!(reason = %message, "Request rejected");
                message.clone()
            }
            RestError::PartialWrite { message } => {
                error!(error = %message, "Partial write");
                PARTIAL_WRITE.to_string()
            }
            RestError::Analytics { message } => {
                error!(error = %message, "Analytics failed");
                ANALYTICS_FAILED.to_string()
            }
            RestError::NotFound { entity } => format!("Unknown entity '{}'", entity),
            RestError::InternalError { message } => {
                error!(error = %message, "Internal error");
                INTERNAL_ERROR.to_string()
            }
        };

        (self.status(), body).into_response()
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => RestError::BadRequest {
                message: e.message().to_string(),
            },
            StorageError::Write(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<WriteError> for RestError {
    fn from(err: WriteError) -> Self {
        RestError::PartialWrite {
            message: err.to_string(),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::ConnectionFailed { .. } => RestError::StoreUnavailable {
                message: err.to_string(),
            },
            _ => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
