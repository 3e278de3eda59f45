//! Demo content for an empty database
//!
//! Seeding runs only when the `skills` table has never held a row. Each
//! insert stands alone: a failure is logged and the rest carry on.

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

use portfolio_core::entities::{BlogPostDraft, EducationDraft, ExperienceDraft, ProjectDraft, SkillDraft};
use portfolio_core::traits::{
    BlogPostRepository, CategoryRepository, EducationRepository, ExperienceRepository,
    ProjectRepository, RepoResult, SkillRepository,
};
use portfolio_core::value_objects::Proficiency;

use crate::repositories::{
    SqliteBlogPostRepository, SqliteCategoryRepository, SqliteEducationRepository,
    SqliteExperienceRepository, SqliteProjectRepository, SqliteSkillRepository,
};

const LANGUAGES: &str = "Programming languages";

const CATEGORIES: &[&str] = &["Software", LANGUAGES, "Frontend", "Backend", "Databases"];

/// (name, category, description, proficiency)
const SKILLS: &[(&str, &str, &str, u8)] = &[
    (
        "GoLang",
        LANGUAGES,
        "High level, compiled, general purpose programming language with built in memory management. \
         Has a robust standard library along with an extensive package repository. \
         My goto language for web servers and CLI/TUI applications",
        60,
    ),
    (
        "C++",
        LANGUAGES,
        "High level, compiled, general purpose programming language. Has excellent performance but \
         requires manual memory management. My goto language for games and performance critical code",
        60,
    ),
    (
        "Java",
        LANGUAGES,
        "High level, compiles to byte code that runs anywhere with a JVM, garbage collected. \
         My goto language for cross platform development",
        50,
    ),
    (
        "Python",
        LANGUAGES,
        "High level interpreted language, used for scripting, data analysis, and machine learning. \
         My goto language for image processing and machine learning",
        60,
    ),
    (
        "Lua",
        LANGUAGES,
        "Lightweight general purpose scripting language. Mainly used as an embedded scripting \
         language in applications",
        60,
    ),
    (
        "JavaScript",
        LANGUAGES,
        "Frontend and backend development with modern JS/TS.",
        85,
    ),
    (
        "Tailwind CSS",
        "Frontend",
        "Utility-first CSS framework for rapid UI development.",
        80,
    ),
    (
        "HTMX",
        "Frontend",
        "Hypermedia-driven interactions without heavy JS frameworks.",
        85,
    ),
    ("Echo", "Backend", "High-performance Go web framework.", 75),
    (
        "SQLite",
        "Databases",
        "Lightweight embedded relational database.",
        70,
    ),
    (
        "Docker",
        "Software",
        "Containerization for consistent development and deployment.",
        50,
    ),
    (
        "Git",
        "Software",
        "Version control software for managing and maintaining code bases.",
        65,
    ),
];

const PORTFOLIO_SKILLS: &[&str] = &["GoLang", "HTMX", "Tailwind CSS", "Echo", "SQLite"];
const TASK_MANAGER_SKILLS: &[&str] = &["GoLang", "SQLite"];

const GOTH_POST: &str = "# Getting Started with the GOTH Stack

The GOTH stack combines **Go**, **Templ**, **HTMX**, and **Tailwind CSS** to build fast, \
server-rendered web applications.

## Why GOTH?

- **Go** gives you a fast, compiled backend.
- **Templ** provides type-safe HTML templates.
- **HTMX** adds dynamic interactions without writing JavaScript.
- **Tailwind** makes styling fast with utility classes.";

/// Log and drop a failed insert
fn keep<T>(what: &str, result: RepoResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, item = what, "Seed insert failed, skipping");
            None
        }
    }
}

/// Insert demo content when no skill has ever been stored
///
/// Returns `true` when seeding ran. Soft-deleted skills count as existing,
/// so deleting everything does not bring the demo content back.
#[instrument(skip(pool))]
pub async fn seed_if_empty(pool: &SqlitePool) -> RepoResult<bool> {
    let skills = SqliteSkillRepository::new(pool.clone());
    if skills.count_all().await? > 0 {
        return Ok(false);
    }
    info!("Seeding database");

    let categories = SqliteCategoryRepository::new(pool.clone());
    let mut category_ids = HashMap::new();
    for &name in CATEGORIES {
        if let Some(id) = keep(name, categories.create(name).await) {
            category_ids.insert(name, id);
        }
    }

    let mut skill_ids = HashMap::new();
    for &(name, category, description, proficiency) in SKILLS {
        let Some(&category_id) = category_ids.get(category) else {
            warn!(skill = name, category, "Seed category missing, skipping skill");
            continue;
        };
        let Some(proficiency) = keep(name, Proficiency::new(proficiency).map_err(Into::into))
        else {
            continue;
        };
        let draft = SkillDraft::new(name, category_id, proficiency).with_description(description);
        if let Some(id) = keep(name, skills.create(&draft).await) {
            skill_ids.insert(name, id);
        }
    }

    let links = |names: &[&str]| -> Vec<i64> {
        names
            .iter()
            .filter_map(|name| skill_ids.get(name).copied())
            .collect()
    };

    let projects = SqliteProjectRepository::new(pool.clone());
    let portfolio = ProjectDraft {
        long_desc: "A deep dive into building a portfolio with Go, Templ, HTMX, and Tailwind."
            .to_string(),
        repo_url: "https://github.com/you/portfolio".to_string(),
        live_url: "https://example.com".to_string(),
        ..ProjectDraft::new(
            "Portfolio Website",
            "My personal portfolio built with the GOTH stack.",
        )
    };
    keep(
        "Portfolio Website",
        projects
            .create_with_skills(&portfolio, &links(PORTFOLIO_SKILLS))
            .await,
    );

    let task_manager = ProjectDraft {
        long_desc: "Manage your tasks from the command line with SQLite persistence.".to_string(),
        repo_url: "https://github.com/you/taskcli".to_string(),
        ..ProjectDraft::new(
            "CLI Task Manager",
            "A terminal-based task manager written in Go.",
        )
    };
    keep(
        "CLI Task Manager",
        projects
            .create_with_skills(&task_manager, &links(TASK_MANAGER_SKILLS))
            .await,
    );

    let education = SqliteEducationRepository::new(pool.clone());
    keep(
        "education",
        education
            .create(&EducationDraft {
                degree: "BS Computer Science".to_string(),
                college: "Suny Polytechnic".to_string(),
                gpa: 3.2,
                in_progress: true,
            })
            .await,
    );

    let experiences = SqliteExperienceRepository::new(pool.clone());
    let seeded_experiences = [
        ExperienceDraft {
            title: "BS Computer Science".to_string(),
            company: "University of Example".to_string(),
            start_date: "2022-09".to_string(),
            end_date: None,
            description: "Pursuing a BS in Computer Science.".to_string(),
        },
        ExperienceDraft {
            title: "Software Intern".to_string(),
            company: "Acme Corp".to_string(),
            start_date: "2024-06".to_string(),
            end_date: Some("2024-09".to_string()),
            description: "Built internal tools with Go and React.".to_string(),
        },
    ];
    for draft in &seeded_experiences {
        keep(&draft.title, experiences.create(draft).await);
    }

    let posts = SqliteBlogPostRepository::new(pool.clone());
    keep(
        "blog post",
        posts
            .create(&BlogPostDraft {
                title: "Getting Started with the GOTH Stack".to_string(),
                slug: "getting-started-goth-stack".to_string(),
                excerpt: "Learn how to build modern web apps with Go, Templ, HTMX, and Tailwind."
                    .to_string(),
                content: GOTH_POST.to_string(),
                tags: "Go,HTMX,Tutorial".to_string(),
                published: true,
            })
            .await,
    );

    info!(
        categories = category_ids.len(),
        skills = skill_ids.len(),
        "Seeding complete"
    );
    Ok(true)
}
