use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use study_core::model::AuthToken;

use crate::repository::{StorageError, TOKEN_KEY, TokenRepository};

use super::SqliteRepository;

#[async_trait]
impl TokenRepository for SqliteRepository {
    async fn load_token(&self) -> Result<Option<AuthToken>, StorageError> {
        let row = sqlx::query("SELECT value FROM client_state WHERE key = ?1")
            .bind(TOKEN_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(AuthToken::new(value))
    }

    async fn save_token(
        &self,
        token: &AuthToken,
        saved_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO client_state (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(TOKEN_KEY)
        .bind(token.as_str())
        .bind(saved_at)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM client_state WHERE key = ?1")
            .bind(TOKEN_KEY)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
