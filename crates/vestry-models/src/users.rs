//! Console user domain models and DTOs.

use crate::identity::Role;
use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use vestry_core::status::AccountStatus;

/// A console user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new user. Creation is gated on the acting user's
/// role; the service checks before issuing the request.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub role: Role,
}

/// DTO for updating a user. Full-field replace; role changes travel
/// here, status changes never do.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub role: Role,
}
