//! Examination domain models and DTOs.
//!
//! An examination starts PENDING, can be published (visibility rotated
//! server-side), and is deleted by a one-way move to DISABLED.

use crate::ids::{ExamId, TermId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use vestry_core::status::ExamStatus;

/// An examination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Examination {
    pub id: ExamId,
    pub name: String,
    /// Term the examination belongs to, if scheduled into one
    pub term_id: Option<TermId>,
    pub exam_date: Option<NaiveDate>,
    pub status: ExamStatus,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new examination. Status defaults to PENDING
/// server-side.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateExamDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub term_id: Option<TermId>,
    pub exam_date: Option<NaiveDate>,
}

/// DTO for updating an examination. Full-field replace.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateExamDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub term_id: Option<TermId>,
    pub exam_date: Option<NaiveDate>,
}
