//! Blog post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for blog_posts table
#[derive(Debug, Clone, FromRow)]
pub struct BlogPostModel {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub tags: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
