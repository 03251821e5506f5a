use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::password::{hash_pin_blocking, verify_pin_blocking};
use crate::auth::token::TokenService;
use crate::db::models::{DbUser, PublicUser, UserId};
use crate::db::sqlite::SqlitePool;
use crate::error::VaultError;
use crate::service::categories::seed_defaults;
use crate::types::requests::{LoginRequest, RegisterRequest, non_empty};

const USERNAME_TAKEN: &str = "Username already exists.";

/// A freshly issued token and the public view of its user.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: PublicUser,
}

#[derive(Clone)]
pub struct AccountStore {
    pool: SqlitePool,
    tokens: Arc<TokenService>,
}

impl AccountStore {
    pub fn new(pool: SqlitePool, tokens: Arc<TokenService>) -> Self {
        Self { pool, tokens }
    }

    /// Create the account and its default categories in one transaction.
    pub async fn register(&self, req: RegisterRequest) -> Result<Session, VaultError> {
        let (Some(full_name), Some(username), Some(pin)) = (
            non_empty(req.full_name),
            non_empty(req.username),
            non_empty(req.pin),
        ) else {
            return Err(VaultError::Validation(
                "Unable to register. Data is incomplete.".into(),
            ));
        };

        // The UNIQUE constraint is authoritative; this only spares a hash.
        if self.find_by_username(&username).await?.is_some() {
            return Err(VaultError::Conflict(USERNAME_TAKEN.into()));
        }

        let pin_hash = hash_pin_blocking(pin).await?;

        let mut tx = self.pool.begin().await?;
        let done = sqlx::query("INSERT INTO users (full_name, username, pin) VALUES (?, ?, ?)")
            .bind(&full_name)
            .bind(&username)
            .bind(&pin_hash)
            .execute(&mut *tx)
            .await
            .map_err(|e| VaultError::on_unique_violation(e, USERNAME_TAKEN))?;
        let user_id = UserId(done.last_insert_rowid());

        seed_defaults(&mut *tx, user_id).await?;
        tx.commit().await?;

        let token = self.tokens.issue(user_id, &username)?;
        info!(user_id = user_id.0, "user registered");
        Ok(Session {
            token,
            user: PublicUser {
                id: user_id,
                full_name,
                username,
            },
        })
    }

    pub async fn login(&self, req: LoginRequest) -> Result<Session, VaultError> {
        let (Some(username), Some(pin)) = (non_empty(req.username), non_empty(req.pin)) else {
            return Err(VaultError::Validation(
                "Unable to login. Data is incomplete.".into(),
            ));
        };

        let Some(user) = self.find_by_username(&username).await? else {
            warn!("login for unknown username");
            return Err(VaultError::UnknownUser);
        };

        if !verify_pin_blocking(pin, user.pin.clone()).await? {
            warn!(user_id = user.id.0, "login with wrong pin");
            return Err(VaultError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id, &user.username)?;
        info!(user_id = user.id.0, "user logged in");
        Ok(Session {
            token,
            user: user.into(),
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<DbUser>, VaultError> {
        let user = sqlx::query_as::<_, DbUser>(
            "SELECT id, full_name, username, pin FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
