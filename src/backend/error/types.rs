/**
 * Backend Error Types
 *
 * This module defines the error taxonomy surfaced by the chat API.
 *
 * # Error Kinds
 *
 * - `NotFound` - a referenced user, message, or chat request does not exist
 * - `Forbidden` - the sender's account is banned
 * - `Conflict` - a storage uniqueness constraint was violated
 * - `Database` - an unexpected storage failure; the detail never reaches
 *   the client
 *
 * Every failure is detected inside the single storage transaction of the
 * operation that raised it, so an error implies no partial writes.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the chat API
#[derive(Debug, Error)]
pub enum ApiError {
    /// A referenced user, message, or chat request does not exist
    #[error("{0}")]
    NotFound(String),

    /// The operation is not allowed for this account
    #[error("{0}")]
    Forbidden(String),

    /// The write collided with an existing row
    #[error("{0}")]
    Conflict(String),

    /// Unexpected storage failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Create a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Create a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Storage errors are reported as an opaque internal failure; the
    /// detail only goes to the log.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound(message) | Self::Forbidden(message) | Self::Conflict(message) => {
                message.clone()
            }
            Self::Database(_) => "internal server error".to_string(),
        }
    }
}
