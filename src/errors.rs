//! Unified error type for the service.
//!
//! Client input problems and store failures are kept as distinct variants so the
//! HTTP layer can report them with different status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

/// All errors produced by the service.
#[derive(Debug, Error)]
pub enum Error {
    /// A month string that is not a valid `YYYY-MM` value
    #[error("Invalid month format. Use YYYY-MM")]
    InvalidMonth {
        /// The rejected input
        month: String,
    },

    /// A date string that is not a valid ISO 8601 timestamp
    #[error("Invalid date format. Use ISO 8601")]
    InvalidDate {
        /// The rejected input
        date: String,
    },

    /// A field is missing or out of range, or the request body could not be read
    #[error("{message}")]
    Validation {
        /// Human-readable description of the problem
        message: String,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// The store could not be reached or a query failed
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// I/O failure (binding the listener, reading files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the caller's input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMonth { .. } | Self::InvalidDate { .. } | Self::Validation { .. }
        )
    }

    /// HTTP status used when this error ends a request.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidMonth { .. } | Self::InvalidDate { .. } => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Database(_) | Self::Config { .. } | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text sent to the caller in the `detail` field.
    ///
    /// Client errors are echoed in full; server-side failures only name their
    /// kind, the underlying error goes to the log.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidMonth { .. } | Self::InvalidDate { .. } | Self::Validation { .. } => {
                self.to_string()
            }
            Self::Database(DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) => {
                "Database unavailable".to_string()
            }
            Self::Database(_) => "Database error".to_string(),
            Self::Config { .. } | Self::Io(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::debug!("Rejected request: {}", self);
        } else {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
