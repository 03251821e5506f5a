use sqlx::{SqliteConnection, SqliteExecutor};
use tracing::info;

use crate::db::models::{DbCategory, UserId};
use crate::db::owned::Owner;
use crate::db::sqlite::SqlitePool;
use crate::error::VaultError;
use crate::types::requests::{CreateCategory, RenameCategory, non_empty};

/// Seeded for every new account, inside the registration transaction.
pub const DEFAULT_CATEGORIES: [&str; 4] =
    ["Social Media", "Entertainment", "Communication", "Education"];

const NAME_TAKEN: &str = "Category name already exists.";
const NOT_FOUND: &str = "Category not found or access denied.";

#[derive(Clone)]
pub struct CategoryStore {
    pool: SqlitePool,
}

impl CategoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, owner: Owner) -> Result<Vec<DbCategory>, VaultError> {
        let rows = sqlx::query_as::<_, DbCategory>(
            "SELECT id, user_id, category_name FROM categories
             WHERE user_id = ? ORDER BY category_name ASC",
        )
        .bind(owner.user_id())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, owner: Owner, req: CreateCategory) -> Result<DbCategory, VaultError> {
        let Some(name) = non_empty(req.category_name) else {
            return Err(VaultError::Validation(
                "Unable to create category. Category name is required.".into(),
            ));
        };

        if self.name_taken(owner, &name, None).await? {
            return Err(VaultError::Conflict(NAME_TAKEN.into()));
        }

        let done = sqlx::query("INSERT INTO categories (user_id, category_name) VALUES (?, ?)")
            .bind(owner.user_id())
            .bind(&name)
            .execute(&self.pool)
            .await
            .map_err(|e| VaultError::on_unique_violation(e, NAME_TAKEN))?;

        let id = done.last_insert_rowid();
        info!(user_id = owner.user_id().0, category_id = id, "category created");
        Ok(DbCategory {
            id,
            user_id: owner.user_id(),
            category_name: name,
        })
    }

    pub async fn rename(&self, owner: Owner, req: RenameCategory) -> Result<DbCategory, VaultError> {
        let (Some(id), Some(name)) = (req.id, non_empty(req.category_name)) else {
            return Err(VaultError::Validation(
                "Unable to update category. Required fields are missing.".into(),
            ));
        };

        if !owner.owns::<DbCategory>(&self.pool, id).await? {
            return Err(VaultError::NotFound(NOT_FOUND.into()));
        }
        if self.name_taken(owner, &name, Some(id)).await? {
            return Err(VaultError::Conflict(NAME_TAKEN.into()));
        }

        sqlx::query("UPDATE categories SET category_name = ? WHERE id = ? AND user_id = ?")
            .bind(&name)
            .bind(id)
            .bind(owner.user_id())
            .execute(&self.pool)
            .await
            .map_err(|e| VaultError::on_unique_violation(e, NAME_TAKEN))?;

        info!(user_id = owner.user_id().0, category_id = id, "category renamed");
        Ok(DbCategory {
            id,
            user_id: owner.user_id(),
            category_name: name,
        })
    }

    /// Credentials filed under the category stay, with their category cleared.
    pub async fn delete(&self, owner: Owner, id: Option<i64>) -> Result<(), VaultError> {
        let Some(id) = id else {
            return Err(VaultError::Validation(
                "Unable to delete category. Category ID is required.".into(),
            ));
        };

        let mut tx = self.pool.begin().await?;
        if !owner.owns::<DbCategory>(&mut *tx, id).await? {
            return Err(VaultError::NotFound(NOT_FOUND.into()));
        }

        let detached = sqlx::query(
            "UPDATE passwords SET category_id = NULL WHERE category_id = ? AND user_id = ?",
        )
        .bind(id)
        .bind(owner.user_id())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        owner.delete::<DbCategory>(&mut *tx, id).await?;
        tx.commit().await?;

        info!(
            user_id = owner.user_id().0,
            category_id = id,
            detached,
            "category deleted"
        );
        Ok(())
    }

    /// Runs on `exec` so callers can check inside their own transaction.
    pub async fn exists<'e>(
        &self,
        exec: impl SqliteExecutor<'e>,
        owner: Owner,
        id: i64,
    ) -> Result<bool, VaultError> {
        Ok(owner.owns::<DbCategory>(exec, id).await?)
    }

    async fn name_taken(
        &self,
        owner: Owner,
        name: &str,
        except: Option<i64>,
    ) -> Result<bool, VaultError> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM categories
             WHERE user_id = ? AND category_name = ? AND (? IS NULL OR id <> ?)
             LIMIT 1",
        )
        .bind(owner.user_id())
        .bind(name)
        .bind(except)
        .bind(except)
        .fetch_optional(&self.pool)
        .await?;
        Ok(found.is_some())
    }
}

pub async fn seed_defaults(conn: &mut SqliteConnection, user_id: UserId) -> Result<(), VaultError> {
    for name in DEFAULT_CATEGORIES {
        sqlx::query("INSERT INTO categories (user_id, category_name) VALUES (?, ?)")
            .bind(user_id)
            .bind(name)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}
