pub mod auth;
pub mod categories;
pub mod passwords;

use crate::error::VaultError;
use crate::types::envelope::{Envelope, Reply};
use axum::http::StatusCode;

pub async fn method_not_allowed() -> VaultError {
    VaultError::MethodNotAllowed
}

pub async fn unknown_endpoint() -> VaultError {
    VaultError::UnknownEndpoint
}

pub async fn health() -> Reply<()> {
    Envelope::ok().reply(StatusCode::OK)
}
