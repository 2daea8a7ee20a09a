//! The acting user's identity, read from persisted client state.
//!
//! The login flow (out of scope here) writes a bearer token and a
//! serialized current-user object into client-side storage. This layer
//! only reads them. Modules that gate operations on who is acting take
//! an explicit [`ActingUser`] argument rather than re-reading ambient
//! storage.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// Role of the acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Registrar,
    Teacher,
    Student,
}

impl Role {
    /// Whether this role may manage user accounts.
    pub fn can_manage_users(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The identity on whose behalf requests are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActingUser {
    pub id: UserId,
    pub role: Role,
}

/// The persisted session as the login flow stores it: an access token
/// plus the current-user object. Read-only from this layer.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub user: ActingUser,
}

impl StoredSession {
    /// Parse a serialized session.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
