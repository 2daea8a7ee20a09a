//! Partial results for multi-child batch operations.
//!
//! Unassigning N children fires N independent requests, so some can
//! succeed while others fail. Callers receive the full split and must
//! decide how to present it; a dialog must never toast a blanket
//! success while `failed` is non-empty.

use crate::errors::ApiError;

/// Outcome of a batch of per-child requests, keyed by child ID.
#[derive(Debug)]
pub struct BatchOutcome<I> {
    pub succeeded: Vec<I>,
    pub failed: Vec<(I, ApiError)>,
}

impl<I> BatchOutcome<I> {
    /// Split a sequence of per-child results into successes and failures.
    pub fn collect(results: impl IntoIterator<Item = (I, Result<(), ApiError>)>) -> Self {
        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        for (id, result) in results {
            match result {
                Ok(()) => succeeded.push(id),
                Err(err) => failed.push((id, err)),
            }
        }
        Self { succeeded, failed }
    }

    /// True when every child request succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// The child IDs that failed, for surfacing to the user.
    pub fn failed_ids(&self) -> Vec<&I> {
        self.failed.iter().map(|(id, _)| id).collect()
    }
}
