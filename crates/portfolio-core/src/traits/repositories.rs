//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Every read hides soft-deleted rows. Updates against a missing or deleted
//! id succeed without effect, so a successful return never proves that the
//! row exists.

use async_trait::async_trait;
use chrono::Duration;

use crate::entities::{
    BlogPost, BlogPostDraft, Education, EducationDraft, Experience, ExperienceDraft, Project,
    ProjectDraft, Session, Skill, SkillCategory, SkillDraft, SkillUse,
};
use crate::error::DomainError;
use crate::value_objects::SessionToken;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Skill Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List live categories ordered by name
    async fn find_all(&self) -> RepoResult<Vec<SkillCategory>>;

    /// Find a live category by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<SkillCategory>;

    /// Create a category, failing on a duplicate name
    async fn create(&self, name: &str) -> RepoResult<i64>;

    /// Rename a category
    async fn update(&self, id: i64, name: &str) -> RepoResult<()>;

    /// Soft delete a category
    async fn soft_delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Skill Repository
// ============================================================================

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// List live skills, most proficient first
    async fn find_all(&self) -> RepoResult<Vec<Skill>>;

    /// List live skills in one category, most proficient first
    async fn find_by_category(&self, category_id: i64) -> RepoResult<Vec<Skill>>;

    /// Find a live skill by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Skill>;

    /// Create a skill
    async fn create(&self, draft: &SkillDraft) -> RepoResult<i64>;

    /// Update a skill
    async fn update(&self, id: i64, draft: &SkillDraft) -> RepoResult<()>;

    /// Soft delete a skill
    async fn soft_delete(&self, id: i64) -> RepoResult<()>;

    /// Count every skill row, soft-deleted ones included
    async fn count_all(&self) -> RepoResult<i64>;
}

// ============================================================================
// Project Repository
// ============================================================================

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// List live projects, newest first
    async fn find_all(&self) -> RepoResult<Vec<Project>>;

    /// Find a live project by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Project>;

    /// Create a project
    async fn create(&self, draft: &ProjectDraft) -> RepoResult<i64>;

    /// Update a project
    async fn update(&self, id: i64, draft: &ProjectDraft) -> RepoResult<()>;

    /// Create a project and link it to `skill_ids` in one transaction
    async fn create_with_skills(&self, draft: &ProjectDraft, skill_ids: &[i64]) -> RepoResult<i64>;

    /// Update a project and replace its skill links in one transaction
    async fn update_with_skills(
        &self,
        id: i64,
        draft: &ProjectDraft,
        skill_ids: &[i64],
    ) -> RepoResult<()>;

    /// Soft delete a project
    async fn soft_delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Skill Use Repository (skill <-> project links)
// ============================================================================

#[async_trait]
pub trait SkillUseRepository: Send + Sync {
    /// Link a skill to a project; linking twice keeps a single row
    async fn add(&self, skill_id: i64, project_id: i64) -> RepoResult<()>;

    /// Unlink a skill from a project; unknown pairs are ignored
    async fn remove(&self, skill_id: i64, project_id: i64) -> RepoResult<()>;

    /// Replace every link of a project in a single transaction
    async fn replace_for_project(&self, project_id: i64, skill_ids: &[i64]) -> RepoResult<()>;

    /// Live skills used by a live project
    async fn skills_for_project(&self, project_id: i64) -> RepoResult<Vec<Skill>>;

    /// Live projects that used a live skill
    async fn projects_for_skill(&self, skill_id: i64) -> RepoResult<Vec<Project>>;

    /// One live project that used the skill, chosen uniformly at random
    async fn random_project_for_skill(&self, skill_id: i64) -> RepoResult<Option<Project>>;

    /// Raw link rows of a project
    async fn links_for_project(&self, project_id: i64) -> RepoResult<Vec<SkillUse>>;
}

// ============================================================================
// Experience Repository
// ============================================================================

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// List live experiences, most recent start first
    async fn find_all(&self) -> RepoResult<Vec<Experience>>;

    /// Find a live experience by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Experience>;

    /// Create an experience
    async fn create(&self, draft: &ExperienceDraft) -> RepoResult<i64>;

    /// Update an experience
    async fn update(&self, id: i64, draft: &ExperienceDraft) -> RepoResult<()>;

    /// Soft delete an experience
    async fn soft_delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Education Repository
// ============================================================================

#[async_trait]
pub trait EducationRepository: Send + Sync {
    /// List education, in-progress degrees first, then by degree
    async fn find_all(&self) -> RepoResult<Vec<Education>>;

    /// Find an education record by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Education>;

    /// Create an education record
    async fn create(&self, draft: &EducationDraft) -> RepoResult<i64>;

    /// Update an education record
    async fn update(&self, id: i64, draft: &EducationDraft) -> RepoResult<()>;

    /// Permanently delete an education record
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Blog Post Repository
// ============================================================================

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// List live published posts, newest first
    async fn find_published(&self) -> RepoResult<Vec<BlogPost>>;

    /// List every live post including drafts, newest first
    async fn find_all(&self) -> RepoResult<Vec<BlogPost>>;

    /// Find a live post by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<BlogPost>;

    /// Find a live published post by slug
    async fn find_published_by_slug(&self, slug: &str) -> RepoResult<BlogPost>;

    /// Create a post, failing on a duplicate slug
    async fn create(&self, draft: &BlogPostDraft) -> RepoResult<i64>;

    /// Update a post
    async fn update(&self, id: i64, draft: &BlogPostDraft) -> RepoResult<()>;

    /// Soft delete a post
    async fn soft_delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Issue a new session valid for `ttl`
    async fn create(&self, ttl: Duration) -> RepoResult<Session>;

    /// Whether an unexpired session with this token exists
    ///
    /// Point-in-time check; expiry is never extended.
    async fn is_valid(&self, token: &SessionToken) -> RepoResult<bool>;

    /// Delete a session
    async fn delete(&self, token: &SessionToken) -> RepoResult<()>;

    /// Delete every expired session, returning how many were removed
    async fn purge_expired(&self) -> RepoResult<u64>;
}
