//! Education database model

use sqlx::FromRow;

/// Database model for education table
#[derive(Debug, Clone, FromRow)]
pub struct EducationModel {
    pub id: i64,
    pub degree: String,
    pub college: String,
    pub gpa: f64,
    pub in_progress: bool,
}
