//! Blog: public reading and administration

use portfolio_core::BlogPostDraft;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::mappers::map_all;
use crate::dto::{
    BlogPostForm, BlogPostResponse, BlogPostSummaryResponse, EditFormResponse, MutationResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Blog service
pub struct BlogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlogService<'a> {
    /// Create a new BlogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Public ===

    /// Published posts, newest first
    #[instrument(skip(self))]
    pub async fn published(&self) -> ServiceResult<Vec<BlogPostSummaryResponse>> {
        let posts = self.ctx.blog_post_repo().find_published().await?;
        Ok(map_all(&posts))
    }

    /// A published post by slug; drafts are invisible
    #[instrument(skip(self))]
    pub async fn post(&self, slug: &str) -> ServiceResult<BlogPostResponse> {
        let post = self.ctx.blog_post_repo().find_published_by_slug(slug).await?;
        Ok(BlogPostResponse::from(&post))
    }

    // === Admin ===

    /// All posts including drafts
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<BlogPostSummaryResponse>> {
        let posts = self.ctx.blog_post_repo().find_all().await?;
        Ok(map_all(&posts))
    }

    #[instrument(skip(self))]
    pub async fn form(&self, id: Option<i64>) -> ServiceResult<EditFormResponse<BlogPostResponse>> {
        let item = match id {
            Some(id) => Some(BlogPostResponse::from(
                &self.ctx.blog_post_repo().find_by_id(id).await?,
            )),
            None => None,
        };
        Ok(EditFormResponse { item })
    }

    /// Create a post; slugs are unique
    #[instrument(skip(self, form), fields(slug = %form.slug))]
    pub async fn create(&self, form: BlogPostForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        let id = self
            .ctx
            .blog_post_repo()
            .create(&BlogPostDraft::from(form))
            .await?;
        info!(post_id = id, "Blog post created");
        Ok(MutationResponse { id })
    }

    #[instrument(skip(self, form), fields(slug = %form.slug))]
    pub async fn update(&self, id: i64, form: BlogPostForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        self.ctx
            .blog_post_repo()
            .update(id, &BlogPostDraft::from(form))
            .await?;
        Ok(MutationResponse { id })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MutationResponse> {
        self.ctx.blog_post_repo().soft_delete(id).await?;
        info!(post_id = id, "Blog post deleted");
        Ok(MutationResponse { id })
    }
}
