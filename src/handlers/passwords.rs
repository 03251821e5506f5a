use axum::{
    extract::{Query, State},
    http::StatusCode,
};

use crate::VaultError;
use crate::db::models::CredentialView;
use crate::middleware::{AuthUser, VaultJson};
use crate::router::VaultState;
use crate::types::envelope::{Envelope, Reply};
use crate::types::requests::{
    CategoryFilter, CreateCredential, IdQuery, UpdateCredential, parse_id,
};

/// GET /passwords[?category_id=]
pub async fn list_passwords(
    State(state): State<VaultState>,
    user: AuthUser,
    Query(filter): Query<CategoryFilter>,
) -> Result<Reply<Vec<CredentialView>>, VaultError> {
    let category_id = parse_id(filter.category_id.as_deref())?;
    let entries = state.credentials.list(user.owner(), category_id).await?;
    Ok(Envelope::data(entries).reply(StatusCode::OK))
}

/// POST /passwords
pub async fn create_password(
    State(state): State<VaultState>,
    user: AuthUser,
    VaultJson(req): VaultJson<CreateCredential>,
) -> Result<Reply<CredentialView>, VaultError> {
    let entry = state.credentials.create(user.owner(), req).await?;
    Ok(Envelope::data(entry)
        .with_message("Password entry created successfully.")
        .reply(StatusCode::CREATED))
}

/// PUT /passwords
pub async fn update_password(
    State(state): State<VaultState>,
    user: AuthUser,
    VaultJson(req): VaultJson<UpdateCredential>,
) -> Result<Reply<()>, VaultError> {
    state.credentials.update(user.owner(), req).await?;
    Ok(Envelope::message("Password entry updated successfully.").reply(StatusCode::OK))
}

/// DELETE /passwords?id=
pub async fn delete_password(
    State(state): State<VaultState>,
    user: AuthUser,
    Query(query): Query<IdQuery>,
) -> Result<Reply<()>, VaultError> {
    let id = parse_id(query.id.as_deref())?;
    state.credentials.delete(user.owner(), id).await?;
    Ok(Envelope::message("Password entry deleted successfully.").reply(StatusCode::OK))
}
