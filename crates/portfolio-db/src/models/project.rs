//! Project database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for projects table
#[derive(Debug, Clone, FromRow)]
pub struct ProjectModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub long_desc: String,
    pub image_url: String,
    pub repo_url: String,
    pub live_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for skill_uses table
#[derive(Debug, Clone, Copy, FromRow)]
pub struct SkillUseModel {
    pub skill_id: i64,
    pub project_id: i64,
}
