//! Teacher domain models and DTOs.

use crate::ids::TeacherId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use vestry_core::status::AccountStatus;

/// A teacher account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new teacher.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

/// DTO for updating a teacher. Full-field replace.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

/// DTO for assigning a batch of subjects to a teacher in one request.
#[derive(Debug, Clone, Serialize)]
pub struct AssignSubjectsDto {
    pub subject_ids: Vec<crate::ids::SubjectId>,
}
