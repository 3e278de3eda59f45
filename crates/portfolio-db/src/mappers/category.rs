//! Skill category model -> entity mapper

use portfolio_core::entities::SkillCategory;

use crate::models::CategoryModel;

impl From<CategoryModel> for SkillCategory {
    fn from(model: CategoryModel) -> Self {
        SkillCategory {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
