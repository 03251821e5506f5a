use axum::{
    extract::{Query, State},
    http::StatusCode,
};

use crate::VaultError;
use crate::db::models::DbCategory;
use crate::middleware::{AuthUser, VaultJson};
use crate::router::VaultState;
use crate::types::envelope::{Envelope, Reply};
use crate::types::requests::{CreateCategory, IdQuery, RenameCategory, parse_id};

/// GET /categories
pub async fn list_categories(
    State(state): State<VaultState>,
    user: AuthUser,
) -> Result<Reply<Vec<DbCategory>>, VaultError> {
    let categories = state.categories.list(user.owner()).await?;
    Ok(Envelope::data(categories).reply(StatusCode::OK))
}

/// POST /categories
pub async fn create_category(
    State(state): State<VaultState>,
    user: AuthUser,
    VaultJson(req): VaultJson<CreateCategory>,
) -> Result<Reply<DbCategory>, VaultError> {
    let category = state.categories.create(user.owner(), req).await?;
    Ok(Envelope::data(category)
        .with_message("Category created successfully.")
        .reply(StatusCode::CREATED))
}

/// PUT /categories
pub async fn rename_category(
    State(state): State<VaultState>,
    user: AuthUser,
    VaultJson(req): VaultJson<RenameCategory>,
) -> Result<Reply<DbCategory>, VaultError> {
    let category = state.categories.rename(user.owner(), req).await?;
    Ok(Envelope::data(category)
        .with_message("Category updated successfully.")
        .reply(StatusCode::OK))
}

/// DELETE /categories?id=
pub async fn delete_category(
    State(state): State<VaultState>,
    user: AuthUser,
    Query(query): Query<IdQuery>,
) -> Result<Reply<()>, VaultError> {
    let id = parse_id(query.id.as_deref())?;
    state.categories.delete(user.owner(), id).await?;
    Ok(Envelope::message("Category deleted successfully.").reply(StatusCode::OK))
}
