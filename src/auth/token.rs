//! Session tokens.
//!
//! HS256-signed JWTs carrying `iss`, `aud`, `iat`, `exp` and a `data` object
//! with the user id and username. Validation is all-or-nothing: signature,
//! issuer, audience and expiry must all check out.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::JwtConfig;
use crate::db::models::UserId;
use crate::error::VaultError;

pub const MIN_SECRET_LEN: usize = 32;
/// Upper bound on token lifetime: one year.
pub const MAX_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// Identity embedded in a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub user_id: UserId,
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    pub data: SessionData,
}

pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(
        secret: &[u8],
        issuer: impl Into<String>,
        audience: impl Into<String>,
        ttl_secs: i64,
    ) -> Result<Self, VaultError> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(VaultError::Config(format!(
                "signing key must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        if !(1..=MAX_TTL_SECS).contains(&ttl_secs) {
            return Err(VaultError::Config(format!(
                "token ttl must be between 1 and {MAX_TTL_SECS} seconds, got {ttl_secs}"
            )));
        }
        let issuer = issuer.into();
        let audience = audience.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer.as_str()]);
        validation.set_audience(&[audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            issuer,
            audience,
            ttl_secs,
        })
    }

    pub fn from_config(cfg: &JwtConfig) -> Result<Self, VaultError> {
        let secret = cfg.resolve_secret()?;
        Self::new(
            secret.as_bytes(),
            cfg.issuer.clone(),
            cfg.audience.clone(),
            cfg.ttl_secs,
        )
    }

    pub fn issue(&self, user_id: UserId, username: &str) -> Result<String, VaultError> {
        self.issue_at(user_id, username, Utc::now().timestamp())
    }

    fn issue_at(
        &self,
        user_id: UserId,
        username: &str,
        issued_at: i64,
    ) -> Result<String, VaultError> {
        let exp = issued_at
            .checked_add(self.ttl_secs)
            .ok_or_else(|| VaultError::Internal("token expiry out of range".into()))?;
        let claims = Claims {
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: issued_at,
            exp,
            data: SessionData {
                user_id,
                username: username.to_string(),
            },
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| VaultError::Internal(format!("failed to sign token: {e}")))
    }

    pub fn validate(&self, token: &str) -> Result<SessionData, VaultError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.data)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "token rejected");
                VaultError::Unauthenticated("Unauthorized access. Invalid or expired token.".into())
            })
    }
}
