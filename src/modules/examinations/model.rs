//! Examination and class-exam data models and DTOs.
//!
//! Re-exported from the `vestry-models` crate.

pub use vestry_models::class_exams::*;
pub use vestry_models::examinations::*;
