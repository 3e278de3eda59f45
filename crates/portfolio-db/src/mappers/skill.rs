//! Skill model -> entity mapper

use portfolio_core::entities::Skill;
use portfolio_core::error::DomainError;
use portfolio_core::value_objects::Proficiency;

use crate::models::SkillModel;

impl TryFrom<SkillModel> for Skill {
    type Error = DomainError;

    fn try_from(model: SkillModel) -> Result<Self, Self::Error> {
        Ok(Skill {
            id: model.id,
            name: model.name,
            category_id: model.category_id,
            category: model.category,
            description: model.description,
            icon_url: model.icon_url,
            proficiency: Proficiency::try_from(model.proficiency)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
