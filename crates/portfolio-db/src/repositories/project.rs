//! SQLite implementation of ProjectRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::instrument;

use portfolio_core::entities::{Project, ProjectDraft};
use portfolio_core::error::DomainError;
use portfolio_core::traits::{ProjectRepository, RepoResult};

use crate::models::ProjectModel;
use crate::query::{live_update, soft_delete_statement, LiveSelect};

use super::error::{map_db_error, map_write_error};
use super::skill_use::relink;

pub(crate) const PROJECT_COLUMNS: &str = "p.id, p.title, p.description, p.long_desc, \
     p.image_url, p.repo_url, p.live_url, p.created_at, p.updated_at";

const PROJECT_FIELDS: &[&str] = &[
    "title",
    "description",
    "long_desc",
    "image_url",
    "repo_url",
    "live_url",
];

async fn insert(tx: &mut Transaction<'_, Sqlite>, draft: &ProjectDraft) -> RepoResult<i64> {
    let now = Utc::now();
    let result = sqlx::query(
        r"
        INSERT INTO projects (title, description, long_desc, image_url, repo_url, live_url, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
        ",
    )
    .bind(&draft.title)
    .bind(&draft.description)
    .bind(&draft.long_desc)
    .bind(&draft.image_url)
    .bind(&draft.repo_url)
    .bind(&draft.live_url)
    .bind(now)
    .execute(&mut **tx)
    .await
    .map_err(map_write_error)?;

    Ok(result.last_insert_rowid())
}

/// Returns whether a live row was updated
async fn update_live(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
    draft: &ProjectDraft,
) -> RepoResult<bool> {
    let result = sqlx::query(&live_update("projects", PROJECT_FIELDS))
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.long_desc)
        .bind(&draft.image_url)
        .bind(&draft.repo_url)
        .bind(&draft.live_url)
        .bind(Utc::now())
        .bind(id)
        .execute(&mut **tx)
        .await
        .map_err(map_write_error)?;

    Ok(result.rows_affected() > 0)
}

/// SQLite implementation of ProjectRepository
#[derive(Clone)]
pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    /// Create a new SqliteProjectRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> RepoResult<Transaction<'static, Sqlite>> {
        self.pool.begin().await.map_err(map_db_error)
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Project>> {
        let sql = LiveSelect::from("projects", "p")
            .columns(PROJECT_COLUMNS)
            .order_by("p.created_at DESC, p.id DESC")
            .build();
        let results = sqlx::query_as::<_, ProjectModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Project::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Project> {
        let sql = LiveSelect::from("projects", "p")
            .columns(PROJECT_COLUMNS)
            .filter("p.id = ?1")
            .build();
        sqlx::query_as::<_, ProjectModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(Project::from)
            .ok_or(DomainError::ProjectNotFound(id))
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &ProjectDraft) -> RepoResult<i64> {
        self.create_with_skills(draft, &[]).await
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, draft: &ProjectDraft) -> RepoResult<()> {
        let mut tx = self.begin().await?;
        update_live(&mut tx, id, draft).await?;
        tx.commit().await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create_with_skills(&self, draft: &ProjectDraft, skill_ids: &[i64]) -> RepoResult<i64> {
        let mut tx = self.begin().await?;
        let id = insert(&mut tx, draft).await?;
        relink(&mut tx, id, skill_ids).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn update_with_skills(
        &self,
        id: i64,
        draft: &ProjectDraft,
        skill_ids: &[i64],
    ) -> RepoResult<()> {
        let mut tx = self.begin().await?;
        // A missing or deleted project is a silent no-op, links included
        if update_live(&mut tx, id, draft).await? {
            relink(&mut tx, id, skill_ids).await?;
        }
        tx.commit().await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query(&soft_delete_statement("projects"))
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
