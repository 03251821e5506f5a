pub mod auth;
pub mod command;
pub mod json;

pub use auth::AuthUser;
pub use command::{AuthAction, AuthCommand};
pub use json::VaultJson;
