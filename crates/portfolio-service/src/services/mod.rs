//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] and turns validated forms
//! into repository calls and repository results into response DTOs.

pub mod about;
pub mod auth;
pub mod blog;
pub mod category;
pub mod context;
pub mod dashboard;
pub mod education;
pub mod error;
pub mod experience;
pub mod health;
pub mod project;
pub mod skill;

// Re-export all services for convenience
pub use about::AboutService;
pub use auth::AuthService;
pub use blog::BlogService;
pub use category::CategoryService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use education::EducationService;
pub use error::{ServiceError, ServiceResult};
pub use experience::ExperienceService;
pub use health::HealthService;
pub use project::ProjectService;
pub use skill::SkillService;
