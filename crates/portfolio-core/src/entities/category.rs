//! Skill category entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Grouping for skills ("Programming languages", "Frontend", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
