//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BlogPostRepository, CategoryRepository, EducationRepository, ExperienceRepository,
    ProjectRepository, RepoResult, SessionRepository, SkillRepository, SkillUseRepository,
};
