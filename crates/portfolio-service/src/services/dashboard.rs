//! Admin landing page

use tracing::instrument;

use crate::dto::DashboardResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Live row counts per content type
    #[instrument(skip(self))]
    pub async fn overview(&self) -> ServiceResult<DashboardResponse> {
        Ok(DashboardResponse {
            categories: self.ctx.category_repo().find_all().await?.len(),
            skills: self.ctx.skill_repo().find_all().await?.len(),
            projects: self.ctx.project_repo().find_all().await?.len(),
            experiences: self.ctx.experience_repo().find_all().await?.len(),
            education: self.ctx.education_repo().find_all().await?.len(),
            blog_posts: self.ctx.blog_post_repo().find_all().await?.len(),
        })
    }
}
