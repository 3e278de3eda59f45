//! SQLite implementation of SkillRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use portfolio_core::entities::{Skill, SkillDraft};
use portfolio_core::error::DomainError;
use portfolio_core::traits::{RepoResult, SkillRepository};

use crate::models::SkillModel;
use crate::query::{live_update, soft_delete_statement, LiveSelect};

use super::error::{map_db_error, map_write_error};

pub(crate) const SKILL_COLUMNS: &str = "s.id, s.name, s.category_id, c.name AS category, \
     s.description, s.icon_url, s.proficiency, s.created_at, s.updated_at";

pub(crate) const SKILL_ORDER: &str = "s.proficiency DESC, s.name ASC";

/// Live skills with their category name
///
/// The category join is not liveness-filtered, so a skill keeps its
/// category label after the category is soft deleted.
pub(crate) fn select_skills() -> LiveSelect {
    LiveSelect::from("skills", "s")
        .columns(SKILL_COLUMNS)
        .join("skill_categories", "c", "c.id = s.category_id")
}

pub(crate) fn into_skills(models: Vec<SkillModel>) -> RepoResult<Vec<Skill>> {
    models.into_iter().map(Skill::try_from).collect()
}

/// SQLite implementation of SkillRepository
#[derive(Clone)]
pub struct SqliteSkillRepository {
    pool: SqlitePool,
}

impl SqliteSkillRepository {
    /// Create a new SqliteSkillRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillRepository for SqliteSkillRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Skill>> {
        let sql = select_skills().order_by(SKILL_ORDER).build();
        let results = sqlx::query_as::<_, SkillModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        into_skills(results)
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category_id: i64) -> RepoResult<Vec<Skill>> {
        let sql = select_skills()
            .filter("s.category_id = ?1")
            .order_by(SKILL_ORDER)
            .build();
        let results = sqlx::query_as::<_, SkillModel>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        into_skills(results)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Skill> {
        let sql = select_skills().filter("s.id = ?1").build();
        let result = sqlx::query_as::<_, SkillModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        match result {
            Some(model) => Skill::try_from(model),
            None => Err(DomainError::SkillNotFound(id)),
        }
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &SkillDraft) -> RepoResult<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO skills (name, category_id, description, icon_url, proficiency, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            ",
        )
        .bind(&draft.name)
        .bind(draft.category_id)
        .bind(&draft.description)
        .bind(&draft.icon_url)
        .bind(i64::from(draft.proficiency))
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, draft: &SkillDraft) -> RepoResult<()> {
        let sql = live_update(
            "skills",
            &["name", "category_id", "description", "icon_url", "proficiency"],
        );
        sqlx::query(&sql)
            .bind(&draft.name)
            .bind(draft.category_id)
            .bind(&draft.description)
            .bind(&draft.icon_url)
            .bind(i64::from(draft.proficiency))
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query(&soft_delete_statement("skills"))
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM skills")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
