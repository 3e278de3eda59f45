//! Database models - SQLx-compatible structs for SQLite tables

mod blog_post;
mod category;
mod education;
mod experience;
mod project;
mod skill;

pub use blog_post::BlogPostModel;
pub use category::CategoryModel;
pub use education::EducationModel;
pub use experience::ExperienceModel;
pub use project::{ProjectModel, SkillUseModel};
pub use skill::SkillModel;
