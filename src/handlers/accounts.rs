use axum::{Json, extract::State, http::StatusCode};

use crate::db::models::{DbAccount, NewAccount};
use crate::middleware::json_body::AccountJson;
use crate::types::account::{AccountResponse, LoginRequest};
use crate::{AccountError, router::AccountState};

/// POST /api/register -> 201 with the new account's public profile.
pub async fn register_handler(
    State(state): State<AccountState>,
    AccountJson(body): AccountJson<NewAccount>,
) -> Result<(StatusCode, Json<AccountResponse>), AccountError> {
    let user = state.service.register(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(AccountResponse::new("User registered successfully", user)),
    ))
}

/// POST /api/login -> 200 when the stored password matches verbatim.
pub async fn login_handler(
    State(state): State<AccountState>,
    AccountJson(body): AccountJson<LoginRequest>,
) -> Result<Json<AccountResponse>, AccountError> {
    let user = state
        .service
        .authenticate(body.username.as_deref(), body.password.as_deref())
        .await?;
    Ok(Json(AccountResponse::new("Login successful", user)))
}

/// GET /api/users -> every stored account record.
pub async fn list_users_handler(
    State(state): State<AccountState>,
) -> Result<Json<Vec<DbAccount>>, AccountError> {
    Ok(Json(state.service.list().await?))
}
