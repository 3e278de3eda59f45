//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in portfolio-core.
//! Each repository handles database operations for a specific domain entity.

mod blog_post;
mod category;
mod education;
mod error;
mod experience;
mod project;
mod session;
mod skill;
mod skill_use;

pub use blog_post::SqliteBlogPostRepository;
pub use category::SqliteCategoryRepository;
pub use education::SqliteEducationRepository;
pub use experience::SqliteExperienceRepository;
pub use project::SqliteProjectRepository;
pub use session::SqliteSessionRepository;
pub use skill::SqliteSkillRepository;
pub use skill_use::SqliteSkillUseRepository;
