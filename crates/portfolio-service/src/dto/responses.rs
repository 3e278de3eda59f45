//! Response DTOs for views
//!
//! All response DTOs implement `Serialize`; the API wraps them in a page
//! envelope that tells the renderer whether a fragment was requested.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Skills & Categories
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillResponse {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category: String,
    pub description: String,
    pub icon_url: String,
    pub proficiency: u8,
}

/// Skill popover: the skill plus one project that used it
#[derive(Debug, Clone, Serialize)]
pub struct SkillDetailResponse {
    pub skill: SkillResponse,
    pub project: Option<ProjectResponse>,
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub long_desc: String,
    pub image_url: String,
    pub repo_url: String,
    pub live_url: String,
    pub created_at: DateTime<Utc>,
}

/// Project card with the skills it used
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCardResponse {
    #[serde(flatten)]
    pub project: ProjectResponse,
    pub skills: Vec<SkillResponse>,
    /// Whether the long description is shown
    pub expanded: bool,
}

// ============================================================================
// Resume
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceResponse {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: Option<String>,
    /// `end_date`, or "Present"
    pub end_label: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationResponse {
    pub id: i64,
    pub degree: String,
    pub college: String,
    pub gpa: f64,
    pub in_progress: bool,
}

/// Everything shown on the landing page
#[derive(Debug, Clone, Serialize)]
pub struct AboutPageResponse {
    pub categories: Vec<CategoryResponse>,
    pub skills: Vec<SkillResponse>,
    pub experiences: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
}

// ============================================================================
// Blog
// ============================================================================

/// Post as shown in lists
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostSummaryResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Full post
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostResponse {
    #[serde(flatten)]
    pub summary: BlogPostSummaryResponse,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Admin
// ============================================================================

/// Live row counts for the admin landing page
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardResponse {
    pub categories: usize,
    pub skills: usize,
    pub projects: usize,
    pub experiences: usize,
    pub education: usize,
    pub blog_posts: usize,
}

/// Data for the login form
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginPageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginPageResponse {
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

/// Create/edit form data; `item` is `None` on the "new" form
#[derive(Debug, Clone, Serialize)]
pub struct EditFormResponse<T> {
    pub item: Option<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillFormResponse {
    pub item: Option<SkillResponse>,
    pub categories: Vec<CategoryResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectFormResponse {
    pub item: Option<ProjectResponse>,
    pub skills: Vec<SkillResponse>,
    pub selected_skill_ids: Vec<i64>,
}

/// Outcome of an admin create/update/delete
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    pub id: i64,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
}

impl ReadinessResponse {
    pub fn new(database_ok: bool) -> Self {
        let (status, database) = if database_ok {
            ("ready", "ok")
        } else {
            ("not_ready", "unavailable")
        };
        Self {
            status: status.to_string(),
            timestamp: Utc::now(),
            database: database.to_string(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
