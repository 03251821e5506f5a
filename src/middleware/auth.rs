use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use tracing::warn;

use crate::auth::token::TokenService;
use crate::db::models::UserId;
use crate::db::owned::Owner;
use crate::error::VaultError;

/// The caller behind a valid `Authorization: Bearer <token>` header.
///
/// Taking this extractor is what puts a route behind the gate.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    pub username: String,
}

impl AuthUser {
    pub fn owner(&self) -> Owner {
        Owner::new(self.user_id)
    }
}

pub fn authenticate(tokens: &TokenService, bearer: &str) -> Result<AuthUser, VaultError> {
    let session = tokens.validate(bearer)?;
    Ok(AuthUser {
        user_id: session.user_id,
        username: session.username,
    })
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<TokenService>: FromRef<S>,
{
    type Rejection = VaultError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        VaultError::Unauthenticated(
                            "Unauthorized access. No token provided.".into(),
                        )
                    } else {
                        warn!("malformed authorization header");
                        VaultError::Unauthenticated(
                            "Unauthorized access. Invalid or expired token.".into(),
                        )
                    }
                })?;

        let tokens = Arc::<TokenService>::from_ref(state);
        authenticate(&tokens, bearer.token()).inspect_err(|_| {
            warn!(path = %parts.uri.path(), "rejected bearer token");
        })
    }
}
