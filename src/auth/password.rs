//! PIN hashing with Argon2id. Hashes are PHC strings carrying their own salt.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::VaultError;

pub fn hash_pin(pin: &str) -> Result<String, VaultError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(pin.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| VaultError::Internal(format!("failed to hash pin: {e}")))
}

pub fn verify_pin(pin: &str, hash: &str) -> Result<bool, VaultError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| VaultError::Internal(format!("stored pin hash is malformed: {e}")))?;
    Ok(Argon2::default()
        .verify_password(pin.as_bytes(), &parsed)
        .is_ok())
}

/// Run hashing on the blocking pool; Argon2 is deliberately slow.
pub async fn hash_pin_blocking(pin: String) -> Result<String, VaultError> {
    tokio::task::spawn_blocking(move || hash_pin(&pin))
        .await
        .map_err(|e| VaultError::Internal(format!("pin hashing task failed: {e}")))?
}

pub async fn verify_pin_blocking(pin: String, hash: String) -> Result<bool, VaultError> {
    tokio::task::spawn_blocking(move || verify_pin(&pin, &hash))
        .await
        .map_err(|e| VaultError::Internal(format!("pin verification task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_pin("1234").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("1234"));
        assert!(verify_pin("1234", &hash).unwrap());
        assert!(!verify_pin("4321", &hash).unwrap());
    }

    #[test]
    fn same_pin_gets_distinct_salts() {
        assert_ne!(hash_pin("0000").unwrap(), hash_pin("0000").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_pin("1234", "plain-text").is_err());
    }
}
