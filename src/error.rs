use axum::{Json, http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::types::envelope::Envelope;

#[derive(Debug, ThisError)]
pub enum VaultError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("Invalid PIN.")]
    InvalidCredentials,

    #[error("User not found.")]
    UnknownUser,

    #[error("Invalid category ID.")]
    InvalidReference,

    #[error("Unknown endpoint.")]
    UnknownEndpoint,

    #[error("Method not allowed.")]
    MethodNotAllowed,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl VaultError {
    pub fn status(&self) -> StatusCode {
        match self {
            VaultError::Validation(_) | VaultError::Conflict(_) | VaultError::InvalidReference => {
                StatusCode::BAD_REQUEST
            }
            VaultError::NotFound(_) | VaultError::UnknownEndpoint => StatusCode::NOT_FOUND,
            VaultError::Unauthenticated(_)
            | VaultError::InvalidCredentials
            | VaultError::UnknownUser => StatusCode::UNAUTHORIZED,
            VaultError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            VaultError::Database(_) | VaultError::Config(_) | VaultError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Turn a storage unique-constraint violation into `Conflict`, leaving every
    /// other storage failure untouched.
    pub fn on_unique_violation(err: SqlxError, message: &str) -> Self {
        match &err {
            SqlxError::Database(db) if db.is_unique_violation() => {
                VaultError::Conflict(message.to_string())
            }
            _ => VaultError::Database(err),
        }
    }

    /// A write whose referenced category disappeared after it was checked.
    pub fn on_foreign_key_violation(err: SqlxError) -> Self {
        match &err {
            SqlxError::Database(db) if db.is_foreign_key_violation() => {
                VaultError::InvalidReference
            }
            _ => VaultError::Database(err),
        }
    }
}

impl IntoResponse for VaultError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(Envelope::<()>::failure(self.to_string()))).into_response()
    }
}
