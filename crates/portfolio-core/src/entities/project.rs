//! Project entity and its skill links

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
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

impl Project {
    /// Whether the project has a live deployment link
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.live_url.is_empty()
    }
}

/// Caller-supplied fields for creating or updating a project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub long_desc: String,
    pub image_url: String,
    pub repo_url: String,
    pub live_url: String,
}

impl ProjectDraft {
    /// Create a draft with only a title and short description
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

/// Link between a skill and a project that used it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SkillUse {
    pub skill_id: i64,
    pub project_id: i64,
}
