//! HTTP boundary: the client adapter and the response envelope.

pub mod client;
pub mod envelope;

pub use client::ApiClient;
pub use envelope::{Envelope, ListBody};
