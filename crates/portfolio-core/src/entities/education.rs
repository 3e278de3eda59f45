//! Education entity
//!
//! Education rows have a simpler lifecycle than the other entities: no
//! timestamps and no soft delete.

use serde::Serialize;

/// A degree, finished or in progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Education {
    pub id: i64,
    pub degree: String,
    pub college: String,
    pub gpa: f64,
    pub in_progress: bool,
}

/// Caller-supplied fields for creating or updating an education record
#[derive(Debug, Clone, PartialEq)]
pub struct EducationDraft {
    pub degree: String,
    pub college: String,
    pub gpa: f64,
    pub in_progress: bool,
}
