//! Experience model -> entity mapper

use portfolio_core::entities::Experience;

use crate::models::ExperienceModel;

impl From<ExperienceModel> for Experience {
    fn from(model: ExperienceModel) -> Self {
        let end_date = if model.is_current() {
            None
        } else {
            Some(model.end_date)
        };
        Experience {
            id: model.id,
            title: model.title,
            company: model.company,
            start_date: model.start_date,
            end_date,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_empty_end_date_means_current() {
        let model = ExperienceModel {
            id: 1,
            title: "Software Intern".to_string(),
            company: "Acme Corp".to_string(),
            start_date: "2024-06".to_string(),
            end_date: String::new(),
            description: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let experience = Experience::from(model.clone());
        assert_eq!(experience.end_date, None);

        let experience = Experience::from(ExperienceModel {
            end_date: "2024-09".to_string(),
            ..model
        });
        assert_eq!(experience.end_date.as_deref(), Some("2024-09"));
    }
}
