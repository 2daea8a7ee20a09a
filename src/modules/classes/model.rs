//! Class data models and DTOs.
//!
//! Re-exported from the `vestry-models` crate.

pub use vestry_models::classes::*;
