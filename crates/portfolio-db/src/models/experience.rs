//! Experience database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for experiences table
#[derive(Debug, Clone, FromRow)]
pub struct ExperienceModel {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub start_date: String,
    /// Empty while the position is ongoing
    pub end_date: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExperienceModel {
    #[inline]
    pub fn is_current(&self) -> bool {
        self.end_date.is_empty()
    }
}
