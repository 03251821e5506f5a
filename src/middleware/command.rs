use std::str::FromStr;

use axum::extract::{FromRequest, Request};

use crate::error::VaultError;
use crate::middleware::json::VaultJson;
use crate::types::requests::{LoginRequest, RegisterRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Register,
    Login,
}

impl FromStr for AuthAction {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "register" => Ok(Self::Register),
            "login" => Ok(Self::Login),
            _ => Err(VaultError::UnknownEndpoint),
        }
    }
}

/// `POST /auth?action=...` resolved to a typed command with its body.
#[derive(Debug)]
pub enum AuthCommand {
    Register(RegisterRequest),
    Login(LoginRequest),
}

fn action_from_query(query: Option<&str>) -> Result<AuthAction, VaultError> {
    let action = query
        .and_then(|qs| {
            url::form_urlencoded::parse(qs.as_bytes())
                .find(|(k, _)| k == "action")
                .map(|(_, v)| v.into_owned())
        })
        .unwrap_or_default();
    action.parse()
}

impl<S> FromRequest<S> for AuthCommand
where
    S: Send + Sync,
{
    type Rejection = VaultError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Resolve the action before touching the body so an unknown action is a 404.
        let action = action_from_query(req.uri().query())?;
        match action {
            AuthAction::Register => {
                let VaultJson(body) = VaultJson::<RegisterRequest>::from_request(req, state).await?;
                Ok(AuthCommand::Register(body))
            }
            AuthAction::Login => {
                let VaultJson(body) = VaultJson::<LoginRequest>::from_request(req, state).await?;
                Ok(AuthCommand::Login(body))
            }
        }
    }
}
