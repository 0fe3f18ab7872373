use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use study_core::model::AuthToken;
use thiserror::Error;

/// Key under which the authentication token is stored.
pub const TOKEN_KEY: &str = "token";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable home of the single persisted client value: the auth token.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Read the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn load_token(&self) -> Result<Option<AuthToken>, StorageError>;

    /// Replace the persisted token.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the token cannot be written.
    async fn save_token(&self, token: &AuthToken, saved_at: DateTime<Utc>)
    -> Result<(), StorageError>;

    /// Remove the persisted token. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    async fn clear_token(&self) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for tests.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Raw persisted value for `key`; lets tests observe the store directly.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn raw_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }
}

#[async_trait]
impl TokenRepository for InMemoryRepository {
    async fn load_token(&self) -> Result<Option<AuthToken>, StorageError> {
        Ok(self.raw_value(TOKEN_KEY)?.and_then(AuthToken::new))
    }

    async fn save_token(
        &self,
        token: &AuthToken,
        _saved_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(TOKEN_KEY.to_string(), token.as_str().to_string());
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(TOKEN_KEY);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub tokens: Arc<dyn TokenRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let tokens: Arc<dyn TokenRepository> = Arc::new(InMemoryRepository::new());
        Self { tokens }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::time::fixed_now;

    #[tokio::test]
    async fn empty_store_has_no_token() {
        let repo = InMemoryRepository::new();
        assert!(repo.load_token().await.unwrap().is_none());
        repo.clear_token().await.unwrap();
    }

    #[tokio::test]
    async fn save_replaces_previous_token() {
        let repo = InMemoryRepository::new();
        let first = AuthToken::new("first").unwrap();
        let second = AuthToken::new("second").unwrap();

        repo.save_token(&first, fixed_now()).await.unwrap();
        repo.save_token(&second, fixed_now()).await.unwrap();

        assert_eq!(repo.load_token().await.unwrap(), Some(second));
        assert_eq!(repo.raw_value(TOKEN_KEY).unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn clear_removes_persisted_value() {
        let repo = InMemoryRepository::new();
        repo.save_token(&AuthToken::new("t").unwrap(), fixed_now())
            .await
            .unwrap();
        repo.clear_token().await.unwrap();
        assert_eq!(repo.raw_value(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn storage_errors_carry_their_cause() {
        let errors = [
            StorageError::Connection("pool closed".into()),
            StorageError::Serialization("bad row".into()),
        ];
        for err in &errors {
            let cause = match err {
                StorageError::Connection(cause) | StorageError::Serialization(cause) => cause,
            };
            assert!(err.to_string().ends_with(cause.as_str()), "{err}");
        }
    }
}
