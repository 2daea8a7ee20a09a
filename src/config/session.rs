//! Loading the persisted login session.
//!
//! The login flow writes the session file; this layer only reads it.

use anyhow::Context;
use std::env;
use std::path::Path;
use vestry_models::identity::StoredSession;

/// Read the stored session from a file written by the login flow.
pub fn load_session(path: impl AsRef<Path>) -> anyhow::Result<StoredSession> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file {}", path.display()))?;
    StoredSession::from_json(&raw).context("failed to parse stored session")
}

/// Read the stored session from the path in `VESTRY_SESSION_FILE`.
/// Returns `Ok(None)` when the variable is unset (unauthenticated mode).
pub fn load_session_from_env() -> anyhow::Result<Option<StoredSession>> {
    match env::var("VESTRY_SESSION_FILE") {
        Ok(path) => load_session(path).map(Some),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_session_missing_file() {
        let result = load_session("/nonexistent/session.json");
        assert!(result.is_err());
    }
}
