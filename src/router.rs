use axum::{
    Router,
    routing::{get, post},
};

use crate::db::sqlite::AccountsStorage;
use crate::handlers::accounts::{list_users_handler, login_handler, register_handler};
use crate::service::accounts::AccountService;

/// Process-scoped context shared by every request.
#[derive(Clone)]
pub struct AccountState {
    pub service: AccountService,
}

impl AccountState {
    pub fn new(storage: AccountsStorage) -> Self {
        Self {
            service: AccountService::new(storage),
        }
    }
}

pub fn account_router(state: AccountState) -> Router {
    let api = Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/users", get(list_users_handler));

    Router::new().nest("/api", api).with_state(state)
}
