//! SQLite implementation of ExperienceRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use portfolio_core::entities::{Experience, ExperienceDraft};
use portfolio_core::error::DomainError;
use portfolio_core::traits::{ExperienceRepository, RepoResult};

use crate::models::ExperienceModel;
use crate::query::{live_update, soft_delete_statement, LiveSelect};

use super::error::map_db_error;

fn select() -> LiveSelect {
    LiveSelect::from("experiences", "e").columns(
        "e.id, e.title, e.company, e.start_date, e.end_date, e.description, e.created_at, e.updated_at",
    )
}

/// SQLite implementation of ExperienceRepository
///
/// An ongoing position is stored with an empty `end_date`.
#[derive(Clone)]
pub struct SqliteExperienceRepository {
    pool: SqlitePool,
}

impl SqliteExperienceRepository {
    /// Create a new SqliteExperienceRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExperienceRepository for SqliteExperienceRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Experience>> {
        let sql = select().order_by("e.start_date DESC, e.id DESC").build();
        let results = sqlx::query_as::<_, ExperienceModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Experience::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Experience> {
        let sql = select().filter("e.id = ?1").build();
        sqlx::query_as::<_, ExperienceModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(Experience::from)
            .ok_or(DomainError::ExperienceNotFound(id))
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &ExperienceDraft) -> RepoResult<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO experiences (title, company, start_date, end_date, description, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            ",
        )
        .bind(&draft.title)
        .bind(&draft.company)
        .bind(&draft.start_date)
        .bind(draft.end_date.as_deref().unwrap_or_default())
        .bind(&draft.description)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, draft: &ExperienceDraft) -> RepoResult<()> {
        let sql = live_update(
            "experiences",
            &["title", "company", "start_date", "end_date", "description"],
        );
        sqlx::query(&sql)
            .bind(&draft.title)
            .bind(&draft.company)
            .bind(&draft.start_date)
            .bind(draft.end_date.as_deref().unwrap_or_default())
            .bind(&draft.description)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query(&soft_delete_statement("experiences"))
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
