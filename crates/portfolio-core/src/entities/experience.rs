//! Work experience entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A position held, shown on the about page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company: String,
    /// `YYYY-MM`
    pub start_date: String,
    /// `None` while the position is ongoing
    pub end_date: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Experience {
    /// Whether the position is still held
    #[inline]
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    /// End date for display, "Present" for ongoing positions
    pub fn end_label(&self) -> &str {
        self.end_date.as_deref().unwrap_or("Present")
    }
}

/// Caller-supplied fields for creating or updating an experience
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}
