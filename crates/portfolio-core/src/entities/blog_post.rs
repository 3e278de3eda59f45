//! Blog post entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A blog post, addressed publicly by its slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    /// Comma separated, as entered
    pub tags: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Split the tag string into trimmed, non-empty tags
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// Caller-supplied fields for creating or updating a blog post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostDraft {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub tags: String,
    pub published: bool,
}
