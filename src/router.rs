use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::FromRef,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::token::TokenService;
use crate::db::sqlite::SqlitePool;
use crate::handlers::{self, auth, categories, passwords};
use crate::service::{AccountStore, CategoryStore, CredentialStore};

#[derive(Clone)]
pub struct VaultState {
    pub tokens: Arc<TokenService>,
    pub accounts: AccountStore,
    pub categories: CategoryStore,
    pub credentials: CredentialStore,
}

impl VaultState {
    pub fn new(pool: SqlitePool, tokens: TokenService) -> Self {
        let tokens = Arc::new(tokens);
        let categories = CategoryStore::new(pool.clone());
        Self {
            accounts: AccountStore::new(pool.clone(), tokens.clone()),
            credentials: CredentialStore::new(pool, categories.clone()),
            categories,
            tokens,
        }
    }
}

impl FromRef<VaultState> for Arc<TokenService> {
    fn from_ref(state: &VaultState) -> Self {
        state.tokens.clone()
    }
}

pub fn vault_router(state: VaultState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/auth",
            post(auth::auth_handler).fallback(handlers::method_not_allowed),
        )
        .route(
            "/categories",
            get(categories::list_categories)
                .post(categories::create_category)
                .put(categories::rename_category)
                .delete(categories::delete_category)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/passwords",
            get(passwords::list_passwords)
                .post(passwords::create_password)
                .put(passwords::update_password)
                .delete(passwords::delete_password)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::unknown_endpoint)
        .with_state(state)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(Duration::from_secs(3600))
}
