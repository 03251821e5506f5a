use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::owned::OwnedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserId(pub i64);

#[derive(Debug, Clone, FromRow)]
pub struct DbUser {
    pub id: UserId,
    pub full_name: String,
    pub username: String,
    pub pin: String,
}

/// The user fields safe to echo back; never carries the PIN hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub full_name: String,
    pub username: String,
}

impl From<DbUser> for PublicUser {
    fn from(u: DbUser) -> Self {
        Self {
            id: u.id,
            full_name: u.full_name,
            username: u.username,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DbCategory {
    pub id: i64,
    #[serde(skip_serializing)]
    pub user_id: UserId,
    pub category_name: String,
}

impl OwnedRecord for DbCategory {
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static str = "id, user_id, category_name";
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbCredential {
    pub id: i64,
    pub user_id: UserId,
    pub platform: String,
    pub img_platform: String,
    pub email: String,
    pub password: String,
    pub category_id: Option<i64>,
}

impl OwnedRecord for DbCredential {
    const TABLE: &'static str = "passwords";
    const COLUMNS: &'static str =
        "id, user_id, platform, img_platform, email, password, category_id";
}

/// A credential joined with the name of its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CredentialView {
    pub id: i64,
    pub platform: String,
    pub img_platform: String,
    pub email: String,
    pub password: String,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
}
