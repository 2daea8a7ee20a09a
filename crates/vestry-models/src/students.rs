//! Student domain models and DTOs.
//!
//! Students carry the ACTIVE ↔ DISABLED lifecycle and optionally belong
//! to a class cohort. The students-by-class listing is the one endpoint
//! in the system that accepts a comma-joined set of status tokens
//! instead of a single one.

use crate::ids::{ClassId, StudentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use vestry_core::status::AccountStatus;

/// A student record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Cohort the student currently belongs to, if any
    pub class_id: Option<ClassId>,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new student. Status defaults to ACTIVE server-side.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    pub class_id: Option<ClassId>,
}

/// DTO for updating a student. Full-field replace.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    pub class_id: Option<ClassId>,
}
