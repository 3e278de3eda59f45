//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::ProficiencyError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Skill not found: {0}")]
    SkillNotFound(i64),

    #[error("Skill category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Project not found: {0}")]
    ProjectNotFound(i64),

    #[error("Experience not found: {0}")]
    ExperienceNotFound(i64),

    #[error("Education not found: {0}")]
    EducationNotFound(i64),

    #[error("Blog post not found: {0}")]
    BlogPostNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    InvalidProficiency(#[from] ProficiencyError),

    #[error("Skill category already exists: {0}")]
    DuplicateCategoryName(String),

    #[error("Slug already in use: {0}")]
    DuplicateSlug(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::SkillNotFound(_) => "UNKNOWN_SKILL",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::ProjectNotFound(_) => "UNKNOWN_PROJECT",
            Self::ExperienceNotFound(_) => "UNKNOWN_EXPERIENCE",
            Self::EducationNotFound(_) => "UNKNOWN_EDUCATION",
            Self::BlogPostNotFound(_) => "UNKNOWN_BLOG_POST",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidProficiency(_) => "INVALID_PROFICIENCY",
            Self::DuplicateCategoryName(_) => "DUPLICATE_CATEGORY",
            Self::DuplicateSlug(_) => "DUPLICATE_SLUG",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SkillNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::ProjectNotFound(_)
                | Self::ExperienceNotFound(_)
                | Self::EducationNotFound(_)
                | Self::BlogPostNotFound(_)
        )
    }

    /// Check if this is a validation error
    ///
    /// Uniqueness conflicts count as validation failures of the submitted
    /// input; `is_conflict` narrows them down further.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidProficiency(_)
                | Self::DuplicateCategoryName(_)
                | Self::DuplicateSlug(_)
        )
    }

    /// Check if this is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateCategoryName(_) | Self::DuplicateSlug(_))
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
