//! Skill database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for skills joined with their category name
#[derive(Debug, Clone, FromRow)]
pub struct SkillModel {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category: String,
    pub description: String,
    pub icon_url: String,
    pub proficiency: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
