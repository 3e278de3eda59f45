//! Domain entities - core business objects

mod blog_post;
mod category;
mod education;
mod experience;
mod project;
mod session;
mod skill;

pub use blog_post::{BlogPost, BlogPostDraft};
pub use category::SkillCategory;
pub use education::{Education, EducationDraft};
pub use experience::{Experience, ExperienceDraft};
pub use project::{Project, ProjectDraft, SkillUse};
pub use session::Session;
pub use skill::{Skill, SkillDraft};
