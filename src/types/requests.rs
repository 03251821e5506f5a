use serde::{Deserialize, Deserializer};

use crate::error::VaultError;

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub pin: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub pin: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateCategory {
    pub category_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenameCategory {
    pub id: Option<i64>,
    pub category_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateCredential {
    pub platform: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub category_id: Option<i64>,
}

/// Partial update. `category_id` distinguishes "absent" (`None`) from an
/// explicit `null` (`Some(None)`), which clears the category.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCredential {
    pub id: Option<i64>,
    pub platform: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub category_id: Option<Option<i64>>,
}

/// `?id=` on DELETE routes.
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// `?category_id=` on `GET /passwords`.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryFilter {
    pub category_id: Option<String>,
}

fn present<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Empty strings count as missing.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse an optional numeric query parameter; empty means absent.
pub fn parse_id(raw: Option<&str>) -> Result<Option<i64>, VaultError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse::<i64>()
            .map(Some)
            .map_err(|_| VaultError::Validation(format!("Invalid id: {s}"))),
    }
}
