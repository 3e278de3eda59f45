//! SQLite implementation of SessionRepository
//!
//! Sessions are plain rows keyed by token. Validation is a point-in-time
//! check and never extends expiry.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use portfolio_core::entities::Session;
use portfolio_core::traits::{RepoResult, SessionRepository};
use portfolio_core::value_objects::SessionToken;

use super::error::map_db_error;

/// SQLite implementation of SessionRepository
#[derive(Clone)]
pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    /// Create a new SqliteSessionRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    #[instrument(skip(self))]
    async fn create(&self, ttl: Duration) -> RepoResult<Session> {
        let session = Session {
            token: SessionToken::generate(),
            expires_at: Utc::now() + ttl,
        };

        sqlx::query("INSERT INTO sessions (token, expires_at) VALUES (?1, ?2)")
            .bind(session.token.as_str())
            .bind(session.expires_at)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(session)
    }

    #[instrument(skip(self))]
    async fn is_valid(&self, token: &SessionToken) -> RepoResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sessions WHERE token = ?1 AND expires_at > ?2",
        )
        .bind(token.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, token: &SessionToken) -> RepoResult<()> {
        sqlx::query("DELETE FROM sessions WHERE token = ?1")
            .bind(token.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn purge_expired(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?1")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        let purged = result.rows_affected();
        debug!(purged, "Purged expired sessions");
        Ok(purged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteSessionRepository>();
    }
}
