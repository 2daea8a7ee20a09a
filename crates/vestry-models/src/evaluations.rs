//! Student evaluation domain models and DTOs.
//!
//! Evaluations are the one entity updated with PATCH semantics: the
//! update DTO's fields are all optional and absent fields are omitted
//! from the body entirely, so the backend merges only the keys that
//! travel.

use crate::ids::{EvaluationId, StudentId, TermId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use vestry_core::status::AccountStatus;

/// A per-term evaluation of one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentEvaluation {
    pub id: EvaluationId,
    pub student_id: StudentId,
    pub term_id: TermId,
    /// Letter or numeric grade as the school records it
    pub grade: Option<String>,
    pub remarks: Option<String>,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new evaluation.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateEvaluationDto {
    pub student_id: StudentId,
    pub term_id: TermId,
    #[validate(length(max = 10))]
    pub grade: Option<String>,
    #[validate(length(max = 2000))]
    pub remarks: Option<String>,
}

/// DTO for partially updating an evaluation. Only provided keys travel;
/// the backend merges them into the existing record.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateEvaluationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 10))]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub remarks: Option<String>,
}
