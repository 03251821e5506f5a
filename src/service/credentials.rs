use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use tracing::info;

use crate::db::models::{CredentialView, DbCredential};
use crate::db::owned::Owner;
use crate::db::sqlite::SqlitePool;
use crate::error::VaultError;
use crate::service::categories::CategoryStore;
use crate::service::logo::logo_url;
use crate::types::requests::{CreateCredential, UpdateCredential, non_empty};

const NOT_FOUND: &str = "Password entry not found or access denied.";

const SELECT_VIEW: &str = "SELECT p.id, p.platform, p.img_platform, p.email, p.password,
        p.category_id, c.category_name
    FROM passwords p
    LEFT JOIN categories c ON c.id = p.category_id AND c.user_id = p.user_id";

#[derive(Clone)]
pub struct CredentialStore {
    pool: SqlitePool,
    categories: CategoryStore,
}

impl CredentialStore {
    pub fn new(pool: SqlitePool, categories: CategoryStore) -> Self {
        Self { pool, categories }
    }

    pub async fn list(
        &self,
        owner: Owner,
        category_id: Option<i64>,
    ) -> Result<Vec<CredentialView>, VaultError> {
        let sql = format!(
            "{SELECT_VIEW}
             WHERE p.user_id = ? AND (? IS NULL OR p.category_id = ?)
             ORDER BY p.platform ASC"
        );
        let rows = sqlx::query_as::<_, CredentialView>(&sql)
            .bind(owner.user_id())
            .bind(category_id)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(
        &self,
        owner: Owner,
        req: CreateCredential,
    ) -> Result<CredentialView, VaultError> {
        let (Some(platform), Some(email), Some(password)) = (
            non_empty(req.platform),
            non_empty(req.email),
            non_empty(req.password),
        ) else {
            return Err(VaultError::Validation(
                "Unable to create password entry. Required fields are missing.".into(),
            ));
        };

        let mut tx = self.pool.begin().await?;
        if let Some(category_id) = req.category_id {
            self.ensure_category(&mut tx, owner, category_id).await?;
        }

        let img_platform = logo_url(&platform);
        let done = sqlx::query(
            "INSERT INTO passwords (user_id, platform, img_platform, email, password, category_id)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(owner.user_id())
        .bind(&platform)
        .bind(&img_platform)
        .bind(&email)
        .bind(&password)
        .bind(req.category_id)
        .execute(&mut *tx)
        .await
        .map_err(VaultError::on_foreign_key_violation)?;
        tx.commit().await?;

        let id = done.last_insert_rowid();
        info!(user_id = owner.user_id().0, password_id = id, "password entry created");
        self.view(owner, id).await
    }

    /// Applies only the fields present in `req`. The logo is re-derived only
    /// when the platform actually changes.
    pub async fn update(&self, owner: Owner, req: UpdateCredential) -> Result<(), VaultError> {
        let platform = non_empty(req.platform);
        let email = non_empty(req.email);
        let password = non_empty(req.password);

        let nothing_to_change = platform.is_none()
            && email.is_none()
            && password.is_none()
            && req.category_id.is_none();
        let Some(id) = req.id.filter(|_| !nothing_to_change) else {
            return Err(VaultError::Validation(
                "Unable to update password entry. Required fields are missing.".into(),
            ));
        };

        let mut tx = self.pool.begin().await?;
        let Some(current) = owner.fetch::<DbCredential>(&mut *tx, id).await? else {
            return Err(VaultError::NotFound(NOT_FOUND.into()));
        };

        if let Some(Some(category_id)) = req.category_id {
            self.ensure_category(&mut tx, owner, category_id).await?;
        }

        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE passwords SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(platform) = platform {
                let img_platform = if platform != current.platform {
                    logo_url(&platform)
                } else {
                    current.img_platform
                };
                set.push("platform = ").push_bind_unseparated(platform);
                set.push("img_platform = ").push_bind_unseparated(img_platform);
            }
            if let Some(email) = email {
                set.push("email = ").push_bind_unseparated(email);
            }
            if let Some(password) = password {
                set.push("password = ").push_bind_unseparated(password);
            }
            if let Some(category_id) = req.category_id {
                set.push("category_id = ").push_bind_unseparated(category_id);
            }
        }
        qb.push(" WHERE id = ")
            .push_bind(id)
            .push(" AND user_id = ")
            .push_bind(owner.user_id());

        qb.build()
            .execute(&mut *tx)
            .await
            .map_err(VaultError::on_foreign_key_violation)?;
        tx.commit().await?;
        info!(user_id = owner.user_id().0, password_id = id, "password entry updated");
        Ok(())
    }

    pub async fn delete(&self, owner: Owner, id: Option<i64>) -> Result<(), VaultError> {
        let Some(id) = id else {
            return Err(VaultError::Validation(
                "Unable to delete password entry. Password ID is required.".into(),
            ));
        };

        if !owner.delete::<DbCredential>(&self.pool, id).await? {
            return Err(VaultError::NotFound(NOT_FOUND.into()));
        }
        info!(user_id = owner.user_id().0, password_id = id, "password entry deleted");
        Ok(())
    }

    async fn ensure_category(
        &self,
        conn: &mut SqliteConnection,
        owner: Owner,
        category_id: i64,
    ) -> Result<(), VaultError> {
        if self.categories.exists(conn, owner, category_id).await? {
            Ok(())
        } else {
            Err(VaultError::InvalidReference)
        }
    }

    async fn view(&self, owner: Owner, id: i64) -> Result<CredentialView, VaultError> {
        let sql = format!("{SELECT_VIEW} WHERE p.id = ? AND p.user_id = ?");
        let row = sqlx::query_as::<_, CredentialView>(&sql)
            .bind(id)
            .bind(owner.user_id())
            .fetch_optional(&self.pool)
            .await?;
        row.ok_or_else(|| VaultError::NotFound(NOT_FOUND.into()))
    }
}
