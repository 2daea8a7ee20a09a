//! The response envelope the backend wraps every payload in.
//!
//! List endpoints nest the total count and the page rows one level
//! under the top-level `data` key; single-entity endpoints put the
//! entity directly under `data`.

use serde::Deserialize;
use vestry_core::pagination::Page;

/// Top-level response wrapper: `{ "data": ..., "message": ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// The `data` payload of a list endpoint:
/// `{ "records": <total>, "data": [rows] }`.
#[derive(Debug, Deserialize)]
pub struct ListBody<T> {
    #[serde(default)]
    pub records: Option<i64>,
    pub data: Vec<T>,
}

impl<T> ListBody<T> {
    /// Fold into a [`Page`]. A missing `records` count falls back to
    /// the row count, which is only exact for single-page listings.
    pub fn into_page(self) -> Page<T> {
        let total = self.records.unwrap_or(self.data.len() as i64);
        Page::new(self.data, total)
    }
}

/// Body shape of an error response, parsed best-effort.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
