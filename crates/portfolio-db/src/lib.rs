//! # portfolio-db
//!
//! Database layer implementing repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for all repository traits
//! defined in `portfolio-core`. It handles:
//!
//! - Connection pool management
//! - The idempotent schema runner
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//! - Demo content for an empty database
//!
//! Every table except `skill_uses`, `education` and `sessions` is soft
//! deleted. The "live row" predicate lives in [`query`] and nowhere else.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use portfolio_db::{create_pool, run_migrations, DatabaseConfig, SqliteSkillRepository};
//! use portfolio_core::traits::SkillRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("db/portfolio.db")).await?;
//!     run_migrations(&pool).await?;
//!     let skills = SqliteSkillRepository::new(pool).find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod query;
pub mod repositories;
pub mod schema;
pub mod seed;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, SqlitePool};
pub use repositories::{
    SqliteBlogPostRepository, SqliteCategoryRepository, SqliteEducationRepository,
    SqliteExperienceRepository, SqliteProjectRepository, SqliteSessionRepository,
    SqliteSkillRepository, SqliteSkillUseRepository,
};
pub use schema::run_migrations;
pub use seed::seed_if_empty;
