//! Data transfer objects for form submissions and view data
//!
//! This module provides:
//! - Request DTOs with validation for form inputs
//! - Response DTOs for serializing view data
//! - Mappers between DTOs and domain types

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    BlogPostForm, CategoryForm, EducationForm, ExperienceForm, LoginRequest, ProjectForm,
    SkillFilter, SkillForm,
};

// Re-export commonly used response types
pub use responses::{
    AboutPageResponse, BlogPostResponse, BlogPostSummaryResponse, CategoryResponse,
    DashboardResponse, EditFormResponse, EducationResponse, ExperienceResponse, HealthResponse,
    LoginPageResponse, MutationResponse, ProjectCardResponse, ProjectFormResponse,
    ProjectResponse, ReadinessResponse, SkillDetailResponse, SkillFormResponse, SkillResponse,
};
