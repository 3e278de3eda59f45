//! SQLite implementation of SkillUseRepository

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, instrument};

use portfolio_core::entities::{Project, Skill, SkillUse};
use portfolio_core::traits::{RepoResult, SkillUseRepository};

use crate::models::{ProjectModel, SkillModel, SkillUseModel};
use crate::query::LiveSelect;

use super::error::{map_db_error, map_write_error};
use super::project::PROJECT_COLUMNS;
use super::skill::{into_skills, select_skills, SKILL_ORDER};

const INSERT_LINK: &str = "INSERT OR IGNORE INTO skill_uses (skill_id, project_id) VALUES (?1, ?2)";

/// Replace every link of `project_id` with links to `skill_ids`
///
/// Runs inside the caller's transaction; nothing is visible until it commits.
pub(crate) async fn relink(
    tx: &mut Transaction<'_, Sqlite>,
    project_id: i64,
    skill_ids: &[i64],
) -> RepoResult<()> {
    sqlx::query("DELETE FROM skill_uses WHERE project_id = ?1")
        .bind(project_id)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

    for &skill_id in skill_ids {
        sqlx::query(INSERT_LINK)
            .bind(skill_id)
            .bind(project_id)
            .execute(&mut **tx)
            .await
            .map_err(map_write_error)?;
    }

    debug!(project_id, links = skill_ids.len(), "Relinked project skills");
    Ok(())
}

fn select_projects() -> LiveSelect {
    LiveSelect::from("projects", "p")
        .columns(PROJECT_COLUMNS)
        .join("skill_uses", "su", "su.project_id = p.id")
        .live_join("skills", "s", "s.id = su.skill_id")
        .filter("su.skill_id = ?1")
}

/// SQLite implementation of SkillUseRepository
#[derive(Clone)]
pub struct SqliteSkillUseRepository {
    pool: SqlitePool,
}

impl SqliteSkillUseRepository {
    /// Create a new SqliteSkillUseRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillUseRepository for SqliteSkillUseRepository {
    #[instrument(skip(self))]
    async fn add(&self, skill_id: i64, project_id: i64) -> RepoResult<()> {
        sqlx::query(INSERT_LINK)
            .bind(skill_id)
            .bind(project_id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, skill_id: i64, project_id: i64) -> RepoResult<()> {
        sqlx::query("DELETE FROM skill_uses WHERE skill_id = ?1 AND project_id = ?2")
            .bind(skill_id)
            .bind(project_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn replace_for_project(&self, project_id: i64, skill_ids: &[i64]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        relink(&mut tx, project_id, skill_ids).await?;
        tx.commit().await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn skills_for_project(&self, project_id: i64) -> RepoResult<Vec<Skill>> {
        let sql = select_skills()
            .join("skill_uses", "su", "su.skill_id = s.id")
            .live_join("projects", "p", "p.id = su.project_id")
            .filter("su.project_id = ?1")
            .order_by(SKILL_ORDER)
            .build();
        let results = sqlx::query_as::<_, SkillModel>(&sql)
            .bind(project_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        into_skills(results)
    }

    #[instrument(skip(self))]
    async fn projects_for_skill(&self, skill_id: i64) -> RepoResult<Vec<Project>> {
        let sql = select_projects()
            .order_by("p.created_at DESC, p.id DESC")
            .build();
        let results = sqlx::query_as::<_, ProjectModel>(&sql)
            .bind(skill_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Project::from).collect())
    }

    #[instrument(skip(self))]
    async fn random_project_for_skill(&self, skill_id: i64) -> RepoResult<Option<Project>> {
        let sql = select_projects().order_by("RANDOM()").limit(1).build();
        let result = sqlx::query_as::<_, ProjectModel>(&sql)
            .bind(skill_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Project::from))
    }

    #[instrument(skip(self))]
    async fn links_for_project(&self, project_id: i64) -> RepoResult<Vec<SkillUse>> {
        let results = sqlx::query_as::<_, SkillUseModel>(
            r"
            SELECT skill_id, project_id
            FROM skill_uses
            WHERE project_id = ?1
            ORDER BY skill_id
            ",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SkillUse::from).collect())
    }
}
