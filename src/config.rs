use std::fmt;
use std::fs;
use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::VaultError;

/// Process-wide settings, resolved once at startup.
///
/// Defaults are overridden by `PASSHUB_*` environment variables; nested keys
/// use a double underscore, e.g. `PASSHUB_JWT__SECRET_FILE`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub jwt: JwtConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:passhub.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            jwt: JwtConfig::default(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("PASSHUB_").split("__"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

/// Token signing settings. The key is either given inline or read from
/// `secret_file`; the file wins when both are set.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    pub secret: Option<String>,
    pub secret_file: Option<PathBuf>,
    pub issuer: String,
    pub audience: String,
    pub ttl_secs: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: None,
            secret_file: None,
            issuer: "passhub".to_string(),
            audience: "passhub_app".to_string(),
            ttl_secs: 60 * 60 * 24,
        }
    }
}

impl JwtConfig {
    pub fn resolve_secret(&self) -> Result<String, VaultError> {
        if let Some(path) = self.secret_file.as_ref() {
            let raw = fs::read_to_string(path).map_err(|e| {
                VaultError::Config(format!(
                    "failed to read signing key file {}: {e}",
                    path.display()
                ))
            })?;
            return Ok(raw.trim().to_string());
        }

        self.secret.clone().ok_or_else(|| {
            VaultError::Config(
                "no signing key configured; set PASSHUB_JWT__SECRET or PASSHUB_JWT__SECRET_FILE"
                    .to_string(),
            )
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("secret_file", &self.secret_file)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_token_contract() {
        let cfg = Config::default();
        assert_eq!(cfg.jwt.issuer, "passhub");
        assert_eq!(cfg.jwt.audience, "passhub_app");
        assert_eq!(cfg.jwt.ttl_secs, 86_400);
        assert!(cfg.jwt.secret.is_none());
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let err = JwtConfig::default().resolve_secret().unwrap_err();
        assert!(matches!(err, VaultError::Config(_)));
    }

    #[test]
    fn key_file_takes_precedence_over_inline_key() {
        let mut path = std::env::temp_dir();
        path.push(format!("passhub-key-{}.txt", std::process::id()));
        fs::write(&path, "file-key-file-key-file-key-file-key\n").unwrap();

        let cfg = JwtConfig {
            secret: Some("inline".to_string()),
            secret_file: Some(path.clone()),
            ..JwtConfig::default()
        };
        assert_eq!(
            cfg.resolve_secret().unwrap(),
            "file-key-file-key-file-key-file-key"
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn debug_output_redacts_inline_key() {
        let cfg = JwtConfig {
            secret: Some("super-secret-value".to_string()),
            ..JwtConfig::default()
        };
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("<redacted>"));
    }
}
