//! SQLite implementation of CategoryRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use portfolio_core::entities::SkillCategory;
use portfolio_core::error::DomainError;
use portfolio_core::traits::{CategoryRepository, RepoResult};

use crate::models::CategoryModel;
use crate::query::{live_update, soft_delete_statement, LiveSelect};

use super::error::{map_db_error, map_unique_violation};

fn select() -> LiveSelect {
    LiveSelect::from("skill_categories", "c").columns("c.id, c.name, c.created_at, c.updated_at")
}

/// SQLite implementation of CategoryRepository
#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new SqliteCategoryRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<SkillCategory>> {
        let sql = select().order_by("c.name ASC").build();
        let results = sqlx::query_as::<_, CategoryModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(SkillCategory::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<SkillCategory> {
        let sql = select().filter("c.id = ?1").build();
        sqlx::query_as::<_, CategoryModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(SkillCategory::from)
            .ok_or(DomainError::CategoryNotFound(id))
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO skill_categories (name, created_at, updated_at)
            VALUES (?1, ?2, ?2)
            ",
        )
        .bind(name)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateCategoryName(name.to_string())))?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, name: &str) -> RepoResult<()> {
        sqlx::query(&live_update("skill_categories", &["name"]))
            .bind(name)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(e, || DomainError::DuplicateCategoryName(name.to_string()))
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query(&soft_delete_statement("skill_categories"))
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
