//! Conversions between DTOs and domain types

use portfolio_core::entities::{
    BlogPost, BlogPostDraft, Education, EducationDraft, Experience, ExperienceDraft, Project,
    ProjectDraft, Skill, SkillCategory, SkillDraft,
};
use portfolio_core::value_objects::Proficiency;
use portfolio_core::DomainError;

use super::requests::{BlogPostForm, EducationForm, ExperienceForm, ProjectForm, SkillForm};
use super::responses::{
    BlogPostResponse, BlogPostSummaryResponse, CategoryResponse, EducationResponse,
    ExperienceResponse, ProjectResponse, SkillResponse,
};

// ============================================================================
// Entity -> Response
// ============================================================================

impl From<&SkillCategory> for CategoryResponse {
    fn from(category: &SkillCategory) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

impl From<&Skill> for SkillResponse {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name.clone(),
            category_id: skill.category_id,
            category: skill.category.clone(),
            description: skill.description.clone(),
            icon_url: skill.icon_url.clone(),
            proficiency: skill.proficiency.value(),
        }
    }
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            long_desc: project.long_desc.clone(),
            image_url: project.image_url.clone(),
            repo_url: project.repo_url.clone(),
            live_url: project.live_url.clone(),
            created_at: project.created_at,
        }
    }
}

impl From<&Experience> for ExperienceResponse {
    fn from(experience: &Experience) -> Self {
        Self {
            id: experience.id,
            title: experience.title.clone(),
            company: experience.company.clone(),
            start_date: experience.start_date.clone(),
            end_date: experience.end_date.clone(),
            end_label: experience.end_label().to_string(),
            current: experience.is_current(),
            description: experience.description.clone(),
        }
    }
}

impl From<&Education> for EducationResponse {
    fn from(education: &Education) -> Self {
        Self {
            id: education.id,
            degree: education.degree.clone(),
            college: education.college.clone(),
            gpa: education.gpa,
            in_progress: education.in_progress,
        }
    }
}

impl From<&BlogPost> for BlogPostSummaryResponse {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            tags: post.tag_list().into_iter().map(String::from).collect(),
            published: post.published,
            created_at: post.created_at,
        }
    }
}

impl From<&BlogPost> for BlogPostResponse {
    fn from(post: &BlogPost) -> Self {
        Self {
            summary: BlogPostSummaryResponse::from(post),
            content: post.content.clone(),
            updated_at: post.updated_at,
        }
    }
}

/// Map a slice of entities to responses
pub fn map_all<'a, E, R>(items: &'a [E]) -> Vec<R>
where
    R: From<&'a E>,
{
    items.iter().map(R::from).collect()
}

// ============================================================================
// Form -> Draft
// ============================================================================

impl TryFrom<SkillForm> for SkillDraft {
    type Error = DomainError;

    fn try_from(form: SkillForm) -> Result<Self, Self::Error> {
        let proficiency = Proficiency::try_from(form.proficiency)?;
        Ok(SkillDraft::new(form.name.trim(), form.category_id, proficiency)
            .with_description(form.description)
            .with_icon_url(form.icon_url.trim()))
    }
}

impl ProjectForm {
    /// Split into the project fields and the deduplicated skill ids
    pub fn into_parts(self) -> (ProjectDraft, Vec<i64>) {
        let mut skill_ids = self.skill_ids;
        skill_ids.sort_unstable();
        skill_ids.dedup();
        let draft = ProjectDraft {
            title: self.title.trim().to_string(),
            description: self.description,
            long_desc: self.long_desc,
            image_url: self.image_url.trim().to_string(),
            repo_url: self.repo_url.trim().to_string(),
            live_url: self.live_url.trim().to_string(),
        };
        (draft, skill_ids)
    }
}

impl From<ExperienceForm> for ExperienceDraft {
    fn from(form: ExperienceForm) -> Self {
        Self {
            title: form.title.trim().to_string(),
            company: form.company.trim().to_string(),
            start_date: form.start_date,
            end_date: form.end_date,
            description: form.description,
        }
    }
}

impl From<EducationForm> for EducationDraft {
    fn from(form: EducationForm) -> Self {
        Self {
            degree: form.degree.trim().to_string(),
            college: form.college.trim().to_string(),
            gpa: form.gpa,
            in_progress: form.in_progress,
        }
    }
}

impl From<BlogPostForm> for BlogPostDraft {
    fn from(form: BlogPostForm) -> Self {
        Self {
            title: form.title.trim().to_string(),
            slug: form.slug,
            excerpt: form.excerpt,
            content: form.content,
            tags: form.tags,
            published: form.published,
        }
    }
}
