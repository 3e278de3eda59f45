//! Work experience administration

use portfolio_core::ExperienceDraft;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::mappers::map_all;
use crate::dto::{EditFormResponse, ExperienceForm, ExperienceResponse, MutationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Experience service
pub struct ExperienceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExperienceService<'a> {
    /// Create a new ExperienceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ExperienceResponse>> {
        let experiences = self.ctx.experience_repo().find_all().await?;
        Ok(map_all(&experiences))
    }

    #[instrument(skip(self))]
    pub async fn form(&self, id: Option<i64>) -> ServiceResult<EditFormResponse<ExperienceResponse>> {
        let item = match id {
            Some(id) => Some(ExperienceResponse::from(
                &self.ctx.experience_repo().find_by_id(id).await?,
            )),
            None => None,
        };
        Ok(EditFormResponse { item })
    }

    #[instrument(skip(self, form), fields(company = %form.company))]
    pub async fn create(&self, form: ExperienceForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        let id = self
            .ctx
            .experience_repo()
            .create(&ExperienceDraft::from(form))
            .await?;
        info!(experience_id = id, "Experience created");
        Ok(MutationResponse { id })
    }

    #[instrument(skip(self, form), fields(company = %form.company))]
    pub async fn update(&self, id: i64, form: ExperienceForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        self.ctx
            .experience_repo()
            .update(id, &ExperienceDraft::from(form))
            .await?;
        Ok(MutationResponse { id })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MutationResponse> {
        self.ctx.experience_repo().soft_delete(id).await?;
        info!(experience_id = id, "Experience deleted");
        Ok(MutationResponse { id })
    }
}
