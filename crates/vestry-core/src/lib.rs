//! # Vestry Core
//!
//! Core types for the Vestry console's data-access layer.
//!
//! This crate provides the pieces every entity module shares:
//!
//! - [`errors`]: the error taxonomy for backend calls
//! - [`pagination`]: page queries, page results, and the list-screen state contract
//! - [`status`]: per-entity status lifecycle state machines
//! - [`batch`]: partial outcomes for multi-child assign/unassign operations
//!
//! # Example
//!
//! ```ignore
//! use vestry_core::pagination::{Page, PageQuery, PageState};
//! use vestry_core::status::AccountStatus;
//!
//! let mut state = PageState::new(10);
//! state.set_filter(Some(AccountStatus::Active.to_string()));
//! let query = state.query();
//! ```

pub mod batch;
pub mod errors;
pub mod pagination;
pub mod status;

// Re-export commonly used types at crate root
pub use batch::BatchOutcome;
pub use errors::{ApiError, ApiErrorKind};
pub use pagination::{Page, PageQuery, PageState};
pub use status::{AccountStatus, ClassStatus, ExamStatus, SubjectStatus};
