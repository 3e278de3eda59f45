//! Public pages: about, skill filtering and skill detail

use tracing::instrument;

use crate::dto::mappers::map_all;
use crate::dto::{
    AboutPageResponse, ProjectResponse, SkillDetailResponse, SkillFilter, SkillResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Public read-only views
pub struct AboutService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AboutService<'a> {
    /// Create a new AboutService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Everything on the landing page
    #[instrument(skip(self))]
    pub async fn about_page(&self) -> ServiceResult<AboutPageResponse> {
        let categories = self.ctx.category_repo().find_all().await?;
        let skills = self.ctx.skill_repo().find_all().await?;
        let experiences = self.ctx.experience_repo().find_all().await?;
        let education = self.ctx.education_repo().find_all().await?;

        Ok(AboutPageResponse {
            categories: map_all(&categories),
            skills: map_all(&skills),
            experiences: map_all(&experiences),
            education: map_all(&education),
        })
    }

    /// Skills, optionally restricted to one category
    ///
    /// An absent, empty or `all` category id means every skill.
    #[instrument(skip(self))]
    pub async fn skills(&self, filter: SkillFilter) -> ServiceResult<Vec<SkillResponse>> {
        let category_id = match filter.category_id.as_deref().map(str::trim) {
            None | Some("" | "all") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| ServiceError::validation("Invalid category_id"))?,
            ),
        };

        let skills = match category_id {
            Some(id) => self.ctx.skill_repo().find_by_category(id).await?,
            None => self.ctx.skill_repo().find_all().await?,
        };
        Ok(map_all(&skills))
    }

    /// A skill plus one project that used it, picked at random
    #[instrument(skip(self))]
    pub async fn skill_detail(&self, skill_id: i64) -> ServiceResult<SkillDetailResponse> {
        let skill = self.ctx.skill_repo().find_by_id(skill_id).await?;
        let project = self
            .ctx
            .skill_use_repo()
            .random_project_for_skill(skill_id)
            .await?;

        Ok(SkillDetailResponse {
            skill: SkillResponse::from(&skill),
            project: project.as_ref().map(ProjectResponse::from),
        })
    }
}
