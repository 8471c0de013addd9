use crate::db::models::{DbAccount, NewAccount};
use crate::db::schema::SQLITE_RESET;
use crate::error::AccountError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

const ACCOUNT_COLUMNS: &str = "id, username, password, email, created_at, updated_at";

#[derive(Clone)]
pub struct AccountsStorage {
    pool: SqlitePool,
}

impl AccountsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database behind a single shared connection and rebuild the schema.
    pub async fn connect(database_url: &str) -> Result<Self, AccountError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // One long-lived connection; an in-memory database lives only as long as it does.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_opts)
            .await?;
        let storage = Self::new(pool);
        storage.reset_schema().await?;
        info!(database_url = %database_url, "account storage ready");
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Drop and recreate the account table by executing the bundled DDL.
    pub async fn reset_schema(&self) -> Result<(), AccountError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_RESET.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new account and return the stored row.
    /// A UNIQUE violation on `username` is reported as `DuplicateUsername`.
    pub async fn create(&self, account: NewAccount) -> Result<DbAccount, AccountError> {
        let sql = format!(
            "INSERT INTO users (username, password, email) VALUES (?, ?, ?) RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, DbAccount>(&sql)
            .bind(account.username)
            .bind(account.password)
            .bind(account.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    AccountError::DuplicateUsername
                }
                other => AccountError::StorageFailure(other),
            })
    }

    /// A missing username is refused before querying rather than bound as NULL.
    pub async fn find_by_username(
        &self,
        username: Option<&str>,
    ) -> Result<Option<DbAccount>, AccountError> {
        let Some(username) = username else {
            return Err(AccountError::StorageFailure(sqlx::Error::Protocol(
                "WHERE parameter `username` has no value".to_string(),
            )));
        };
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM users WHERE username = ?");
        let row = sqlx::query_as::<_, DbAccount>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_all(&self) -> Result<Vec<DbAccount>, AccountError> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM users ORDER BY id");
        let rows = sqlx::query_as::<_, DbAccount>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
