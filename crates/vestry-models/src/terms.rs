//! Term domain models and DTOs.
//!
//! Terms subdivide an academic session (e.g., "Term 1", "Michaelmas").
//! They carry the ACTIVE ↔ DISABLED lifecycle, and the backend owns a
//! distinct rotation operation that advances the current term through
//! the school's progression sequence; the console only triggers it and
//! reloads.

use crate::ids::{SessionId, TermId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use vestry_core::status::AccountStatus;

/// A term within an academic session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    /// Unique identifier for the term
    pub id: TermId,
    /// Name of the term (e.g., "Term 1")
    pub name: String,
    /// Academic session this term belongs to
    pub session_id: Option<SessionId>,
    /// Order of the term within the session (1, 2, 3, ...)
    pub sequence: i32,
    /// Current lifecycle status
    pub status: AccountStatus,
    /// Timestamp when the term was created
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new term.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateTermDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub session_id: Option<SessionId>,
    #[validate(range(min = 1))]
    pub sequence: i32,
}

/// DTO for updating a term. Full-field replace.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateTermDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub session_id: Option<SessionId>,
    #[validate(range(min = 1))]
    pub sequence: i32,
}
