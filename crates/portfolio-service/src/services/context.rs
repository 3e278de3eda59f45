//! Service context - dependency container for services
//!
//! Holds the database pool, every repository, and the admin credentials.

use std::sync::Arc;

use portfolio_common::auth::AdminCredentials;
use portfolio_core::traits::{
    BlogPostRepository, CategoryRepository, EducationRepository, ExperienceRepository,
    ProjectRepository, SessionRepository, SkillRepository, SkillUseRepository,
};
use portfolio_db::{
    SqliteBlogPostRepository, SqliteCategoryRepository, SqliteEducationRepository,
    SqliteExperienceRepository, SqlitePool, SqliteProjectRepository, SqliteSessionRepository,
    SqliteSkillRepository, SqliteSkillUseRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: SqlitePool,

    // Repositories
    category_repo: Arc<dyn CategoryRepository>,
    skill_repo: Arc<dyn SkillRepository>,
    project_repo: Arc<dyn ProjectRepository>,
    skill_use_repo: Arc<dyn SkillUseRepository>,
    experience_repo: Arc<dyn ExperienceRepository>,
    education_repo: Arc<dyn EducationRepository>,
    blog_post_repo: Arc<dyn BlogPostRepository>,
    session_repo: Arc<dyn SessionRepository>,

    // Auth
    credentials: Arc<AdminCredentials>,
}

impl ServiceContext {
    /// Create a context backed by the SQLite repositories on `pool`
    pub fn new(pool: SqlitePool, credentials: AdminCredentials) -> Self {
        Self {
            category_repo: Arc::new(SqliteCategoryRepository::new(pool.clone())),
            skill_repo: Arc::new(SqliteSkillRepository::new(pool.clone())),
            project_repo: Arc::new(SqliteProjectRepository::new(pool.clone())),
            skill_use_repo: Arc::new(SqliteSkillUseRepository::new(pool.clone())),
            experience_repo: Arc::new(SqliteExperienceRepository::new(pool.clone())),
            education_repo: Arc::new(SqliteEducationRepository::new(pool.clone())),
            blog_post_repo: Arc::new(SqliteBlogPostRepository::new(pool.clone())),
            session_repo: Arc::new(SqliteSessionRepository::new(pool.clone())),
            credentials: Arc::new(credentials),
            pool,
        }
    }

    // === Database Pool ===

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // === Repositories ===

    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    pub fn skill_repo(&self) -> &dyn SkillRepository {
        self.skill_repo.as_ref()
    }

    pub fn project_repo(&self) -> &dyn ProjectRepository {
        self.project_repo.as_ref()
    }

    pub fn skill_use_repo(&self) -> &dyn SkillUseRepository {
        self.skill_use_repo.as_ref()
    }

    pub fn experience_repo(&self) -> &dyn ExperienceRepository {
        self.experience_repo.as_ref()
    }

    pub fn education_repo(&self) -> &dyn EducationRepository {
        self.education_repo.as_ref()
    }

    pub fn blog_post_repo(&self) -> &dyn BlogPostRepository {
        self.blog_post_repo.as_ref()
    }

    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    // === Auth ===

    /// Get the configured admin credentials
    pub fn credentials(&self) -> &AdminCredentials {
        self.credentials.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Builder for a ServiceContext with individual repositories swapped out
///
/// Repositories that are not set fall back to the SQLite implementation.
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<SqlitePool>,
    credentials: Option<AdminCredentials>,
    session_repo: Option<Arc<dyn SessionRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn credentials(mut self, credentials: AdminCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the pool or credentials are missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::validation("pool is required"))?;
        let credentials = self
            .credentials
            .ok_or_else(|| ServiceError::validation("credentials are required"))?;

        let mut ctx = ServiceContext::new(pool, credentials);
        if let Some(repo) = self.session_repo {
            ctx.session_repo = repo;
        }
        Ok(ctx)
    }
}
