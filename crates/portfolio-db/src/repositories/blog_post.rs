//! SQLite implementation of BlogPostRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use portfolio_core::entities::{BlogPost, BlogPostDraft};
use portfolio_core::error::DomainError;
use portfolio_core::traits::{BlogPostRepository, RepoResult};

use crate::models::BlogPostModel;
use crate::query::{live_update, soft_delete_statement, LiveSelect};

use super::error::{map_db_error, map_unique_violation};

const NEWEST_FIRST: &str = "b.created_at DESC, b.id DESC";

fn select() -> LiveSelect {
    LiveSelect::from("blog_posts", "b").columns(
        "b.id, b.title, b.slug, b.excerpt, b.content, b.tags, b.published, b.created_at, b.updated_at",
    )
}

/// SQLite implementation of BlogPostRepository
#[derive(Clone)]
pub struct SqliteBlogPostRepository {
    pool: SqlitePool,
}

impl SqliteBlogPostRepository {
    /// Create a new SqliteBlogPostRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_all(&self, sql: &str) -> RepoResult<Vec<BlogPost>> {
        let results = sqlx::query_as::<_, BlogPostModel>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(BlogPost::from).collect())
    }
}

#[async_trait]
impl BlogPostRepository for SqliteBlogPostRepository {
    #[instrument(skip(self))]
    async fn find_published(&self) -> RepoResult<Vec<BlogPost>> {
        let sql = select()
            .filter("b.published = 1")
            .order_by(NEWEST_FIRST)
            .build();
        self.fetch_all(&sql).await
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<BlogPost>> {
        let sql = select().order_by(NEWEST_FIRST).build();
        self.fetch_all(&sql).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<BlogPost> {
        let sql = select().filter("b.id = ?1").build();
        sqlx::query_as::<_, BlogPostModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(BlogPost::from)
            .ok_or_else(|| DomainError::BlogPostNotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    async fn find_published_by_slug(&self, slug: &str) -> RepoResult<BlogPost> {
        let sql = select()
            .filter("b.published = 1")
            .filter("b.slug = ?1")
            .build();
        sqlx::query_as::<_, BlogPostModel>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(BlogPost::from)
            .ok_or_else(|| DomainError::BlogPostNotFound(slug.to_string()))
    }

    #[instrument(skip(self, draft), fields(slug = %draft.slug))]
    async fn create(&self, draft: &BlogPostDraft) -> RepoResult<i64> {
        let now = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO blog_posts (title, slug, excerpt, content, tags, published, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
            ",
        )
        .bind(&draft.title)
        .bind(&draft.slug)
        .bind(&draft.excerpt)
        .bind(&draft.content)
        .bind(&draft.tags)
        .bind(draft.published)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateSlug(draft.slug.clone())))?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self, draft), fields(slug = %draft.slug))]
    async fn update(&self, id: i64, draft: &BlogPostDraft) -> RepoResult<()> {
        let sql = live_update(
            "blog_posts",
            &["title", "slug", "excerpt", "content", "tags", "published"],
        );
        sqlx::query(&sql)
            .bind(&draft.title)
            .bind(&draft.slug)
            .bind(&draft.excerpt)
            .bind(&draft.content)
            .bind(&draft.tags)
            .bind(draft.published)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::DuplicateSlug(draft.slug.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query(&soft_delete_statement("blog_posts"))
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
