//! Education administration
//!
//! Education rows are removed outright rather than soft deleted.

use portfolio_core::EducationDraft;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::mappers::map_all;
use crate::dto::{EditFormResponse, EducationForm, EducationResponse, MutationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Education service
pub struct EducationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EducationService<'a> {
    /// Create a new EducationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<EducationResponse>> {
        let education = self.ctx.education_repo().find_all().await?;
        Ok(map_all(&education))
    }

    #[instrument(skip(self))]
    pub async fn form(&self, id: Option<i64>) -> ServiceResult<EditFormResponse<EducationResponse>> {
        let item = match id {
            Some(id) => Some(EducationResponse::from(
                &self.ctx.education_repo().find_by_id(id).await?,
            )),
            None => None,
        };
        Ok(EditFormResponse { item })
    }

    #[instrument(skip(self, form), fields(degree = %form.degree))]
    pub async fn create(&self, form: EducationForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        let id = self
            .ctx
            .education_repo()
            .create(&EducationDraft::from(form))
            .await?;
        info!(education_id = id, "Education created");
        Ok(MutationResponse { id })
    }

    #[instrument(skip(self, form), fields(degree = %form.degree))]
    pub async fn update(&self, id: i64, form: EducationForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        self.ctx
            .education_repo()
            .update(id, &EducationDraft::from(form))
            .await?;
        Ok(MutationResponse { id })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MutationResponse> {
        self.ctx.education_repo().delete(id).await?;
        info!(education_id = id, "Education deleted");
        Ok(MutationResponse { id })
    }
}
