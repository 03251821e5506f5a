use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::VaultError;

/// `Json<T>` whose rejections are rendered in the response envelope.
pub struct VaultJson<T>(pub T);

impl<S, T> FromRequest<S> for VaultJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = VaultError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => Ok(VaultJson(body)),
            Err(rejection) => Err(VaultError::Validation(format!(
                "Invalid request body: {}",
                rejection.body_text()
            ))),
        }
    }
}
