use axum::{extract::State, http::StatusCode};

use crate::middleware::command::AuthCommand;
use crate::router::VaultState;
use crate::types::envelope::{Envelope, Reply};
use crate::VaultError;

/// POST /auth?action=register|login
pub async fn auth_handler(
    State(state): State<VaultState>,
    command: AuthCommand,
) -> Result<Reply<()>, VaultError> {
    let (status, message, session) = match command {
        AuthCommand::Register(req) => (
            StatusCode::CREATED,
            "User registered successfully.",
            state.accounts.register(req).await?,
        ),
        AuthCommand::Login(req) => (
            StatusCode::OK,
            "Login successful.",
            state.accounts.login(req).await?,
        ),
    };

    Ok(Envelope::message(message)
        .with_session(session.token, session.user)
        .reply(status))
}
