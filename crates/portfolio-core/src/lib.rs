//! # portfolio-core
//!
//! Domain layer containing entities, value objects, repository traits, and errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BlogPost, BlogPostDraft, Education, EducationDraft, Experience, ExperienceDraft, Project,
    ProjectDraft, Session, Skill, SkillCategory, SkillDraft, SkillUse,
};
pub use error::DomainError;
pub use traits::{
    BlogPostRepository, CategoryRepository, EducationRepository, ExperienceRepository,
    ProjectRepository, RepoResult, SessionRepository, SkillRepository, SkillUseRepository,
};
pub use value_objects::{Proficiency, ProficiencyError, SessionToken, SessionTokenParseError};
