use axum::{Json, http::StatusCode};
use serde::Serialize;

use crate::db::models::PublicUser;

/// Uniform response body shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicUser>,
}

pub type Reply<T> = (StatusCode, Json<Envelope<T>>);

impl<T> Envelope<T> {
    fn empty(success: bool) -> Self {
        Self {
            success,
            message: None,
            data: None,
            token: None,
            user: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::empty(false)
        }
    }

    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::empty(true)
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::empty(true)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_session(mut self, token: String, user: PublicUser) -> Self {
        self.token = Some(token);
        self.user = Some(user);
        self
    }

    pub fn reply(self, status: StatusCode) -> Reply<T> {
        (status, Json(self))
    }
}

impl Envelope<()> {
    pub fn ok() -> Self {
        Self::empty(true)
    }
}
