//! Skill entity

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::Proficiency;

/// A skill shown on the about page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    /// Name of the owning category, resolved when the skill is read
    pub category: String,
    pub description: String,
    pub icon_url: String,
    pub proficiency: Proficiency,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or updating a skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: String,
    pub category_id: i64,
    pub description: String,
    pub icon_url: String,
    pub proficiency: Proficiency,
}

impl SkillDraft {
    /// Create a draft with empty description and icon
    pub fn new(name: impl Into<String>, category_id: i64, proficiency: Proficiency) -> Self {
        Self {
            name: name.into(),
            category_id,
            description: String::new(),
            icon_url: String::new(),
            proficiency,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon URL
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }
}
