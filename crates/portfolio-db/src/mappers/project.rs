//! Project and skill link model -> entity mappers

use portfolio_core::entities::{Project, SkillUse};

use crate::models::{ProjectModel, SkillUseModel};

impl From<ProjectModel> for Project {
    fn from(model: ProjectModel) -> Self {
        Project {
            id: model.id,
            title: model.title,
            description: model.description,
            long_desc: model.long_desc,
            image_url: model.image_url,
            repo_url: model.repo_url,
            live_url: model.live_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<SkillUseModel> for SkillUse {
    fn from(model: SkillUseModel) -> Self {
        SkillUse {
            skill_id: model.skill_id,
            project_id: model.project_id,
        }
    }
}
