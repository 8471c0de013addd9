use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `users` table, serialized as-is by the listing endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DbAccount {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload. Fields are optional so that missing input reaches the
/// table's NOT NULL constraints instead of being rejected earlier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAccount {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}
