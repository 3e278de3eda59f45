//! Education model -> entity mapper

use portfolio_core::entities::Education;

use crate::models::EducationModel;

impl From<EducationModel> for Education {
    fn from(model: EducationModel) -> Self {
        Education {
            id: model.id,
            degree: model.degree,
            college: model.college,
            gpa: model.gpa,
            in_progress: model.in_progress,
        }
    }
}
