//! Skill administration

use portfolio_core::SkillDraft;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::mappers::map_all;
use crate::dto::{MutationResponse, SkillForm, SkillFormResponse, SkillResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Skill service
pub struct SkillService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SkillService<'a> {
    /// Create a new SkillService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<SkillResponse>> {
        let skills = self.ctx.skill_repo().find_all().await?;
        Ok(map_all(&skills))
    }

    /// Form data; `id` is `None` for a new skill
    #[instrument(skip(self))]
    pub async fn form(&self, id: Option<i64>) -> ServiceResult<SkillFormResponse> {
        let item = match id {
            Some(id) => Some(SkillResponse::from(
                &self.ctx.skill_repo().find_by_id(id).await?,
            )),
            None => None,
        };
        let categories = self.ctx.category_repo().find_all().await?;

        Ok(SkillFormResponse {
            item,
            categories: map_all(&categories),
        })
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create(&self, form: SkillForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        let draft = self.draft(form).await?;
        let id = self.ctx.skill_repo().create(&draft).await?;
        info!(skill_id = id, "Skill created");
        Ok(MutationResponse { id })
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn update(&self, id: i64, form: SkillForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        let draft = self.draft(form).await?;
        self.ctx.skill_repo().update(id, &draft).await?;
        Ok(MutationResponse { id })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MutationResponse> {
        self.ctx.skill_repo().soft_delete(id).await?;
        info!(skill_id = id, "Skill deleted");
        Ok(MutationResponse { id })
    }

    /// Skills may only be filed under a live category
    async fn draft(&self, form: SkillForm) -> ServiceResult<SkillDraft> {
        match self.ctx.category_repo().find_by_id(form.category_id).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => {
                return Err(ServiceError::validation("Unknown skill category"));
            }
            Err(e) => return Err(e.into()),
        }
        Ok(SkillDraft::try_from(form)?)
    }
}
