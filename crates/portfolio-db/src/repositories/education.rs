//! SQLite implementation of EducationRepository
//!
//! Education rows are not soft deleted, so these queries bypass the
//! live-row helpers.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use portfolio_core::entities::{Education, EducationDraft};
use portfolio_core::error::DomainError;
use portfolio_core::traits::{EducationRepository, RepoResult};

use crate::models::EducationModel;

use super::error::map_db_error;

/// SQLite implementation of EducationRepository
#[derive(Clone)]
pub struct SqliteEducationRepository {
    pool: SqlitePool,
}

impl SqliteEducationRepository {
    /// Create a new SqliteEducationRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EducationRepository for SqliteEducationRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Education>> {
        let results = sqlx::query_as::<_, EducationModel>(
            r"
            SELECT id, degree, college, gpa, in_progress
            FROM education
            ORDER BY in_progress DESC, degree ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Education::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Education> {
        sqlx::query_as::<_, EducationModel>(
            r"
            SELECT id, degree, college, gpa, in_progress
            FROM education
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .map(Education::from)
        .ok_or(DomainError::EducationNotFound(id))
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &EducationDraft) -> RepoResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO education (degree, college, gpa, in_progress)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(&draft.degree)
        .bind(&draft.college)
        .bind(draft.gpa)
        .bind(draft.in_progress)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, draft: &EducationDraft) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE education
            SET degree = ?1, college = ?2, gpa = ?3, in_progress = ?4
            WHERE id = ?5
            ",
        )
        .bind(&draft.degree)
        .bind(&draft.college)
        .bind(draft.gpa)
        .bind(draft.in_progress)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query("DELETE FROM education WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
