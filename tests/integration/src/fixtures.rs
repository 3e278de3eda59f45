//! Test fixtures and data generators
//!
//! Form bodies for the admin routes and typed views of the JSON responses.

use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Form bodies
// ============================================================================

pub type FormBody = Vec<(&'static str, String)>;

pub fn category_form(name: &str) -> FormBody {
    vec![("name", name.to_string())]
}

pub fn skill_form(name: &str, category_id: i64, proficiency: i64) -> FormBody {
    vec![
        ("name", name.to_string()),
        ("category_id", category_id.to_string()),
        ("description", format!("{name} description")),
        ("icon_url", String::new()),
        ("proficiency", proficiency.to_string()),
    ]
}

/// Project form; each skill id becomes its own `skill_ids` field
pub fn project_form(title: &str, skill_ids: &[i64]) -> FormBody {
    let mut form = vec![
        ("title", title.to_string()),
        ("description", "Built for the tests".to_string()),
        ("long_desc", "A longer description".to_string()),
        ("repo_url", "https://example.com/repo".to_string()),
    ];
    form.extend(skill_ids.iter().map(|id| ("skill_ids", id.to_string())));
    form
}

pub fn blog_form(title: &str, slug: &str, published: bool) -> FormBody {
    let mut form = vec![
        ("title", title.to_string()),
        ("slug", slug.to_string()),
        ("excerpt", "Short".to_string()),
        ("content", "# Heading".to_string()),
        ("tags", "Rust, SQLite".to_string()),
    ];
    if published {
        form.push(("published", "on".to_string()));
    }
    form
}

pub fn experience_form(title: &str, end_date: &str) -> FormBody {
    vec![
        ("title", title.to_string()),
        ("company", "Initech".to_string()),
        ("start_date", "2023-01".to_string()),
        ("end_date", end_date.to_string()),
        ("description", String::new()),
    ]
}

// ============================================================================
// Response views
// ============================================================================

/// `{"fragment": bool, "data": ...}`
#[derive(Debug, Deserialize)]
pub struct PageBody<T> {
    pub fragment: bool,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct Mutation {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginView {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryView {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillView {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub proficiency: u8,
}

#[derive(Debug, Deserialize)]
pub struct ProjectView {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectCardView {
    pub id: i64,
    pub title: String,
    pub long_desc: String,
    pub skills: Vec<SkillView>,
    pub expanded: bool,
}

#[derive(Debug, Deserialize)]
pub struct SkillDetailView {
    pub skill: SkillView,
    pub project: Option<ProjectView>,
}

#[derive(Debug, Deserialize)]
pub struct ExperienceView {
    pub title: String,
    pub end_label: String,
    pub current: bool,
}

#[derive(Debug, Deserialize)]
pub struct AboutView {
    pub skills: Vec<SkillView>,
    pub experiences: Vec<ExperienceView>,
}

#[derive(Debug, Deserialize)]
pub struct BlogPostView {
    pub slug: String,
    pub title: String,
    pub tags: Vec<String>,
    pub published: bool,
}

#[derive(Debug, Deserialize)]
pub struct DashboardView {
    pub categories: usize,
    pub skills: usize,
    pub projects: usize,
    pub blog_posts: usize,
}
