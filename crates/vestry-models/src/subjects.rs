//! Subject domain models and DTOs.

use crate::ids::SubjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use vestry_core::status::SubjectStatus;

/// A taught subject. Deletion is terminal (status DELETED).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    /// Short catalogue code (e.g., "TH-101")
    pub code: Option<String>,
    pub status: SubjectStatus,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new subject.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateSubjectDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 20))]
    pub code: Option<String>,
}

/// DTO for updating a subject. Full-field replace.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateSubjectDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 20))]
    pub code: Option<String>,
}

/// DTO for assigning a batch of classes to a subject in one request.
#[derive(Debug, Clone, Serialize)]
pub struct AssignClassesDto {
    pub class_ids: Vec<crate::ids::ClassId>,
}
