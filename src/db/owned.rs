//! Row access scoped to the owning user.
//!
//! Every lookup and delete filters on `user_id`, so a row owned by someone
//! else is indistinguishable from a row that does not exist.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqliteExecutor};

use crate::db::models::UserId;

/// A table whose rows belong to exactly one user via a `user_id` column.
pub trait OwnedRecord: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner(UserId);

impl Owner {
    pub fn new(user_id: UserId) -> Self {
        Self(user_id)
    }

    pub fn user_id(self) -> UserId {
        self.0
    }

    pub async fn fetch<'e, T: OwnedRecord>(
        self,
        exec: impl SqliteExecutor<'e>,
        id: i64,
    ) -> Result<Option<T>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ? AND user_id = ?",
            T::COLUMNS,
            T::TABLE
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .bind(self.0)
            .fetch_optional(exec)
            .await
    }

    pub async fn owns<'e, T: OwnedRecord>(
        self,
        exec: impl SqliteExecutor<'e>,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        let sql = format!("SELECT id FROM {} WHERE id = ? AND user_id = ?", T::TABLE);
        let found: Option<i64> = sqlx::query_scalar(&sql)
            .bind(id)
            .bind(self.0)
            .fetch_optional(exec)
            .await?;
        Ok(found.is_some())
    }

    /// Returns `false` when nothing owned by this user matched.
    pub async fn delete<'e, T: OwnedRecord>(
        self,
        exec: impl SqliteExecutor<'e>,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        let sql = format!("DELETE FROM {} WHERE id = ? AND user_id = ?", T::TABLE);
        let done = sqlx::query(&sql)
            .bind(id)
            .bind(self.0)
            .execute(exec)
            .await?;
        Ok(done.rows_affected() > 0)
    }
}
