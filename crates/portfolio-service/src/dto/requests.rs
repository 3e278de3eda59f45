//! Request DTOs for form submissions
//!
//! Admin forms arrive as `application/x-www-form-urlencoded`. Every form
//! implements `Deserialize` and `Validate`.

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

/// HTML checkboxes send "on" when ticked and nothing otherwise
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        value.as_deref().map(str::trim),
        Some("on" | "true" | "1" | "yes")
    ))
}

/// Empty form fields become `None`
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

/// Required text fields must contain more than whitespace
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let well_formed = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::new("slug")
            .with_message("Slug may only contain lowercase letters, digits, and inner hyphens".into()))
    }
}

/// `YYYY-MM`
fn validate_year_month(value: &str) -> Result<(), ValidationError> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 7
        && bytes[4] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..].iter().all(u8::is_ascii_digit);
    let month_ok = shaped && matches!(value[5..].parse::<u8>(), Ok(1..=12));
    if month_ok {
        Ok(())
    } else {
        Err(ValidationError::new("year_month").with_message("Dates must look like YYYY-MM".into()))
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Admin login form
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Public Queries
// ============================================================================

/// `?category_id=` on the skill list; absent or `all` means no filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillFilter {
    pub category_id: Option<String>,
}

// ============================================================================
// Admin Forms
// ============================================================================

/// Create or rename a skill category
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryForm {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "not_blank", message = "Name is required")
    )]
    pub name: String,
}

/// Create or update a skill
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SkillForm {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "not_blank", message = "Name is required")
    )]
    pub name: String,

    pub category_id: i64,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Icon URL must be at most 500 characters"))]
    pub icon_url: String,

    #[validate(range(min = 0, max = 100, message = "Proficiency must be between 0 and 100"))]
    pub proficiency: i64,
}

/// Create or update a project; `skill_ids` may repeat in the form body
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProjectForm {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank", message = "Title is required")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: String,

    #[serde(default)]
    pub long_desc: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub repo_url: String,

    #[serde(default)]
    pub live_url: String,

    #[serde(default)]
    pub skill_ids: Vec<i64>,
}

/// Create or update a work experience
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExperienceForm {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank", message = "Title is required")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = 200, message = "Company must be 1-200 characters"),
        custom(function = "not_blank", message = "Company is required")
    )]
    pub company: String,

    #[validate(custom(function = "validate_year_month"))]
    pub start_date: String,

    /// Empty or absent for an ongoing position
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "validate_year_month"))]
    pub end_date: Option<String>,

    #[serde(default)]
    pub description: String,
}

/// Create or update an education record
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EducationForm {
    #[validate(
        length(min = 1, max = 200, message = "Degree must be 1-200 characters"),
        custom(function = "not_blank", message = "Degree is required")
    )]
    pub degree: String,

    #[validate(
        length(min = 1, max = 200, message = "College must be 1-200 characters"),
        custom(function = "not_blank", message = "College is required")
    )]
    pub college: String,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 4.0, message = "GPA must be between 0.0 and 4.0"))]
    pub gpa: f64,

    #[serde(default, deserialize_with = "checkbox")]
    pub in_progress: bool,
}

/// Create or update a blog post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BlogPostForm {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank", message = "Title is required")
    )]
    pub title: String,

    #[validate(length(max = 200), custom(function = "validate_slug"))]
    pub slug: String,

    #[serde(default)]
    pub excerpt: String,

    #[serde(default)]
    pub content: String,

    /// Comma separated
    #[serde(default)]
    pub tags: String,

    #[serde(default, deserialize_with = "checkbox")]
    pub published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_validation() {
        assert!(validate_slug("getting-started-goth-stack").is_ok());
        assert!(validate_slug("post-2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Has Spaces").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("trailing-").is_err());
    }

    #[test]
    fn test_blank_required_fields_rejected() {
        let form = CategoryForm {
            name: "   ".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let form: EducationForm = serde_json::from_value(serde_json::json!({
            "degree": "\t",
            "college": "MIT"
        }))
        .unwrap();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("degree"));
        assert!(!errors.field_errors().contains_key("college"));

        let form = CategoryForm {
            name: " Databases ".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_year_month_validation() {
        assert!(validate_year_month("2024-06").is_ok());
        assert!(validate_year_month("2024-13").is_err());
        assert!(validate_year_month("2024-00").is_err());
        assert!(validate_year_month("24-06").is_err());
        assert!(validate_year_month("2024/06").is_err());
    }

    #[test]
    fn test_skill_form_proficiency_range() {
        let form = SkillForm {
            name: "Rust".to_string(),
            category_id: 1,
            description: String::new(),
            icon_url: String::new(),
            proficiency: 101,
        };
        assert!(form.validate().is_err());

        let form = SkillForm {
            proficiency: 100,
            ..form
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_experience_form_optional_end_date() {
        let form: ExperienceForm = serde_json::from_value(serde_json::json!({
            "title": "Engineer",
            "company": "Initech",
            "start_date": "2024-01",
            "end_date": "  "
        }))
        .unwrap();
        assert_eq!(form.end_date, None);
        assert!(form.validate().is_ok());

        let form = ExperienceForm {
            end_date: Some("someday".to_string()),
            ..form
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_checkbox_fields() {
        let form: BlogPostForm = serde_json::from_value(serde_json::json!({
            "title": "Hello",
            "slug": "hello",
            "published": "on"
        }))
        .unwrap();
        assert!(form.published);

        let form: BlogPostForm = serde_json::from_value(serde_json::json!({
            "title": "Hello",
            "slug": "hello"
        }))
        .unwrap();
        assert!(!form.published);
        assert!(form.validate().is_ok());
    }
}
