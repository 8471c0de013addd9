use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum AccountError {
    #[error("username already exists")]
    DuplicateUsername,

    #[error("user not found")]
    NotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("storage failure: {0}")]
    StorageFailure(#[from] SqlxError),
}

impl AccountError {
    pub fn status(&self) -> StatusCode {
        match self {
            AccountError::DuplicateUsername | AccountError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AccountError::NotFound => StatusCode::NOT_FOUND,
            AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AccountError::StorageFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match self {
            AccountError::DuplicateUsername => ApiErrorBody {
                code: "USERNAME_TAKEN".to_string(),
                message: "Username already exists.".to_string(),
            },
            AccountError::NotFound => ApiErrorBody {
                code: "USER_NOT_FOUND".to_string(),
                message: "User does not exist.".to_string(),
            },
            AccountError::InvalidCredentials => ApiErrorBody {
                code: "INVALID_PASSWORD".to_string(),
                message: "Incorrect password.".to_string(),
            },
            AccountError::MalformedBody(reason) => ApiErrorBody {
                code: "MALFORMED_BODY".to_string(),
                message: reason,
            },
            AccountError::StorageFailure(e) => {
                error!(error = %e, "storage operation failed");
                ApiErrorBody {
                    code: "STORAGE_FAILURE".to_string(),
                    message: "An internal server error occurred.".to_string(),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}
