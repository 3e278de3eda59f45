//! Skill category administration

use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CategoryForm, CategoryResponse, MutationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().find_all().await?;
        Ok(categories.iter().map(CategoryResponse::from).collect())
    }

    /// Create a category; names are unique
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create(&self, form: CategoryForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        let id = self.ctx.category_repo().create(form.name.trim()).await?;
        info!(category_id = id, "Category created");
        Ok(MutationResponse { id })
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn update(&self, id: i64, form: CategoryForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        self.ctx.category_repo().update(id, form.name.trim()).await?;
        Ok(MutationResponse { id })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MutationResponse> {
        self.ctx.category_repo().soft_delete(id).await?;
        info!(category_id = id, "Category deleted");
        Ok(MutationResponse { id })
    }
}
