use crate::db::models::{DbAccount, NewAccount};
use crate::db::sqlite::AccountsStorage;
use crate::error::AccountError;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Public view of an account; never carries the password.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountProfile {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
}

impl From<DbAccount> for AccountProfile {
    fn from(a: DbAccount) -> Self {
        Self {
            id: a.id,
            username: a.username,
            email: a.email,
        }
    }
}

#[derive(Clone)]
pub struct AccountService {
    storage: AccountsStorage,
}

impl AccountService {
    pub fn new(storage: AccountsStorage) -> Self {
        Self { storage }
    }

    /// Create an account unless the username is already taken.
    ///
    /// The lookup and the insert are separate statements; a concurrent
    /// registration that wins the race is still caught by the UNIQUE
    /// constraint and reported as `DuplicateUsername`.
    pub async fn register(&self, account: NewAccount) -> Result<AccountProfile, AccountError> {
        if self
            .storage
            .find_by_username(account.username.as_deref())
            .await?
            .is_some()
        {
            warn!(username = ?account.username, "registration rejected: username taken");
            return Err(AccountError::DuplicateUsername);
        }

        let created = self.storage.create(account).await?;
        info!(id = created.id, username = %created.username, "account registered");
        Ok(created.into())
    }

    /// Verbatim password comparison against the stored account.
    pub async fn authenticate(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<AccountProfile, AccountError> {
        let Some(account) = self.storage.find_by_username(username).await? else {
            debug!(username = ?username, "login for unknown user");
            return Err(AccountError::NotFound);
        };

        if Some(account.password.as_str()) != password {
            warn!(username = %account.username, "login rejected: password mismatch");
            return Err(AccountError::InvalidCredentials);
        }

        info!(id = account.id, username = %account.username, "login succeeded");
        Ok(account.into())
    }

    /// Every stored account, password included.
    pub async fn list(&self) -> Result<Vec<DbAccount>, AccountError> {
        self.storage.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn service() -> AccountService {
        let storage = AccountsStorage::connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory storage");
        AccountService::new(storage)
    }

    fn signup(username: &str, password: &str, email: Option<&str>) -> NewAccount {
        NewAccount {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            email: email.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn register_returns_profile_without_password() {
        let svc = service().await;
        let profile = svc
            .register(signup("alice", "secret", Some("alice@example.com")))
            .await
            .expect("register");

        assert_eq!(
            profile,
            AccountProfile {
                id: 1,
                username: "alice".to_string(),
                email: Some("alice@example.com".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn register_twice_is_duplicate() {
        let svc = service().await;
        svc.register(signup("alice", "secret", None))
            .await
            .expect("first register");

        let err = svc
            .register(signup("alice", "other", None))
            .await
            .expect_err("second register");
        assert!(matches!(err, AccountError::DuplicateUsername));
        assert_eq!(svc.list().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn authenticate_distinguishes_failures() {
        let svc = service().await;
        let registered = svc
            .register(signup("alice", "secret", None))
            .await
            .expect("register");

        let ok = svc
            .authenticate(Some("alice"), Some("secret"))
            .await
            .expect("valid login");
        assert_eq!(ok, registered);

        let wrong = svc
            .authenticate(Some("alice"), Some("Secret"))
            .await
            .expect_err("wrong password");
        assert!(matches!(wrong, AccountError::InvalidCredentials));

        let missing_pw = svc
            .authenticate(Some("alice"), None)
            .await
            .expect_err("missing password");
        assert!(matches!(missing_pw, AccountError::InvalidCredentials));

        let no_username = svc
            .authenticate(None, Some("secret"))
            .await
            .expect_err("missing username");
        assert!(matches!(no_username, AccountError::StorageFailure(_)));

        let unknown = svc
            .authenticate(Some("bob"), Some("secret"))
            .await
            .expect_err("unknown user");
        assert!(matches!(unknown, AccountError::NotFound));
    }

    #[tokio::test]
    async fn list_exposes_stored_passwords() {
        let svc = service().await;
        svc.register(signup("alice", "secret", None))
            .await
            .expect("register alice");
        svc.register(signup("bob", "hunter2", Some("bob@example.com")))
            .await
            .expect("register bob");

        let all = svc.list().await.expect("list");
        let pairs: Vec<(&str, &str)> = all
            .iter()
            .map(|a| (a.username.as_str(), a.password.as_str()))
            .collect();
        assert_eq!(pairs, vec![("alice", "secret"), ("bob", "hunter2")]);
    }
}
