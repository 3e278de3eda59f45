//! Project cards and project administration

use tracing::{info, instrument};
use validator::Validate;

use crate::dto::mappers::map_all;
use crate::dto::{
    MutationResponse, ProjectCardResponse, ProjectForm, ProjectFormResponse, ProjectResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Project service
pub struct ProjectService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProjectService<'a> {
    /// Create a new ProjectService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every live project with the skills it used, collapsed
    #[instrument(skip(self))]
    pub async fn cards(&self) -> ServiceResult<Vec<ProjectCardResponse>> {
        let projects = self.ctx.project_repo().find_all().await?;
        let mut cards = Vec::with_capacity(projects.len());
        for project in &projects {
            let skills = self.ctx.skill_use_repo().skills_for_project(project.id).await?;
            cards.push(ProjectCardResponse {
                project: ProjectResponse::from(project),
                skills: map_all(&skills),
                expanded: false,
            });
        }
        Ok(cards)
    }

    /// One card, expanded or collapsed
    #[instrument(skip(self))]
    pub async fn card(&self, id: i64, expanded: bool) -> ServiceResult<ProjectCardResponse> {
        let project = self.ctx.project_repo().find_by_id(id).await?;
        let skills = self.ctx.skill_use_repo().skills_for_project(id).await?;
        Ok(ProjectCardResponse {
            project: ProjectResponse::from(&project),
            skills: map_all(&skills),
            expanded,
        })
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ProjectResponse>> {
        let projects = self.ctx.project_repo().find_all().await?;
        Ok(map_all(&projects))
    }

    /// Form data with the skill picker; `id` is `None` for a new project
    #[instrument(skip(self))]
    pub async fn form(&self, id: Option<i64>) -> ServiceResult<ProjectFormResponse> {
        let (item, selected_skill_ids) = match id {
            Some(id) => {
                let project = self.ctx.project_repo().find_by_id(id).await?;
                let links = self.ctx.skill_use_repo().links_for_project(id).await?;
                (
                    Some(ProjectResponse::from(&project)),
                    links.into_iter().map(|link| link.skill_id).collect(),
                )
            }
            None => (None, Vec::new()),
        };
        let skills = self.ctx.skill_repo().find_all().await?;

        Ok(ProjectFormResponse {
            item,
            skills: map_all(&skills),
            selected_skill_ids,
        })
    }

    /// Create a project and link its skills in one transaction
    #[instrument(skip(self, form), fields(title = %form.title))]
    pub async fn create(&self, form: ProjectForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        let (draft, skill_ids) = form.into_parts();
        let id = self
            .ctx
            .project_repo()
            .create_with_skills(&draft, &skill_ids)
            .await?;
        info!(project_id = id, skills = skill_ids.len(), "Project created");
        Ok(MutationResponse { id })
    }

    /// Update a project and replace its skill links in one transaction
    #[instrument(skip(self, form), fields(title = %form.title))]
    pub async fn update(&self, id: i64, form: ProjectForm) -> ServiceResult<MutationResponse> {
        form.validate()?;
        let (draft, skill_ids) = form.into_parts();
        self.ctx
            .project_repo()
            .update_with_skills(id, &draft, &skill_ids)
            .await?;
        Ok(MutationResponse { id })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MutationResponse> {
        self.ctx.project_repo().soft_delete(id).await?;
        info!(project_id = id, "Project deleted");
        Ok(MutationResponse { id })
    }
}
