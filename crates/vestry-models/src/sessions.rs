//! Academic session domain models and DTOs.

use crate::ids::SessionId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use vestry_core::status::AccountStatus;

/// An academic session (e.g., "2024/2025").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new academic session.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateSessionDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// DTO for updating a session. Full-field replace.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateSessionDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
