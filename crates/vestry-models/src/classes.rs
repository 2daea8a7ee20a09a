//! Class domain models and DTOs.
//!
//! A class is a student cohort that stays together from intake to
//! graduation. Its lifecycle runs ONGOING ↔ GRADUATED; graduation is
//! reversible so a class graduated by mistake can be reinstated.

use crate::ids::ClassId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use vestry_core::status::ClassStatus;

/// A class cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    /// Unique identifier, assigned by the backend
    pub id: ClassId,
    /// Display name (e.g., "Intake 2024 A")
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Calendar year the cohort was admitted
    pub intake_year: Option<i32>,
    /// Current lifecycle status
    pub status: ClassStatus,
    /// Timestamp when the class was created
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new class. Status defaults to ONGOING server-side.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateClassDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1900, max = 2200))]
    pub intake_year: Option<i32>,
}

/// DTO for updating a class. Full-field replace: every display field
/// travels; status never does.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateClassDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1900, max = 2200))]
    pub intake_year: Option<i32>,
}
