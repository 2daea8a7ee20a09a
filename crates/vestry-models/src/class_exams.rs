//! Class-examination schedule rows.
//!
//! A class exam links one class cohort to one examination sitting.
//! Cancelling a sitting disables the row; the examination itself is
//! untouched.

use crate::ids::{ClassExamId, ClassId, ExamId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use vestry_core::status::AccountStatus;

/// One class sitting one examination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassExam {
    pub id: ClassExamId,
    pub class_id: ClassId,
    pub exam_id: ExamId,
    pub scheduled_date: Option<NaiveDate>,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

/// DTO for scheduling a class into an examination.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateClassExamDto {
    pub class_id: ClassId,
    pub exam_id: ExamId,
    pub scheduled_date: Option<NaiveDate>,
}
