use crate::service::accounts::AccountProfile;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`. Missing fields are passed through as `None`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Success body shared by registration and login.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub message: String,
    pub user: AccountProfile,
}

impl AccountResponse {
    pub fn new(message: impl Into<String>, user: AccountProfile) -> Self {
        Self {
            message: message.into(),
            user,
        }
    }
}
