//! Status lifecycle state machines.
//!
//! Each entity draws its lifecycle from a small closed set of tokens and
//! moves between them with either a binary toggle or a one-way retirement.
//! Transition functions are pure; the services that call them always
//! re-render from the server's post-transition record rather than
//! trusting the locally computed target, because the row the user acted
//! on may have been stale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a class cohort: ongoing until it graduates, reversible
/// when a class is graduated by mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassStatus {
    Ongoing,
    Graduated,
}

impl ClassStatus {
    /// The target of the graduate/reinstate toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ongoing => Self::Graduated,
            Self::Graduated => Self::Ongoing,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ONGOING",
            Self::Graduated => "GRADUATED",
        }
    }
}

impl fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle shared by students, teachers, users, terms, academic
/// sessions, and class-exam schedule rows: enabled or disabled, always
/// reversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Disabled,
}

impl AccountStatus {
    /// The target of the enable/disable toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Disabled,
            Self::Disabled => Self::Active,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Disabled => "DISABLED",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a subject. Deleting a subject is terminal: whatever the
/// row claimed its current status was, the target is always `DELETED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubjectStatus {
    Active,
    Deleted,
}

impl SubjectStatus {
    /// The target of subject deletion. One-way.
    pub fn retired(self) -> Self {
        Self::Deleted
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for SubjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of an examination. Deleting is a one-way move to
/// `DISABLED`; the pending/published visibility rotation is computed
/// server-side and only triggered from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExamStatus {
    Pending,
    Published,
    Disabled,
}

impl ExamStatus {
    /// The target of examination deletion. One-way.
    pub fn retired(self) -> Self {
        Self::Disabled
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Published => "PUBLISHED",
            Self::Disabled => "DISABLED",
        }
    }
}

impl fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
