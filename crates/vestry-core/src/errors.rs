use anyhow::Error;
use reqwest::StatusCode;
use std::fmt;

/// Broad classification of a failed backend call.
///
/// The console never retries on its own, so the taxonomy only needs to
/// support two caller decisions: show a failure notification, and route
/// 401/403 to the re-authentication flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced a response (DNS, connect, timeout).
    Transport,
    /// The server answered with a non-success status code.
    Status(StatusCode),
    /// The response body did not match the expected envelope.
    Decode,
}

/// Error produced by any Entity Access Module operation.
#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub error: Error,
}

impl ApiError {
    pub fn new<E>(kind: ApiErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn transport<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ApiErrorKind::Transport, err)
    }

    pub fn status<E>(code: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ApiErrorKind::Status(code), err)
    }

    pub fn decode<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ApiErrorKind::Decode, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ApiErrorKind::Status(StatusCode::FORBIDDEN), err)
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Server status code, when the server answered at all.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self.kind {
            ApiErrorKind::Status(code) => Some(code),
            _ => None,
        }
    }

    /// True for 401/403 responses. The shell routes these to the
    /// re-authentication flow instead of a plain failure toast.
    pub fn is_auth(&self) -> bool {
        matches!(
            self.kind,
            ApiErrorKind::Status(StatusCode::UNAUTHORIZED)
                | ApiErrorKind::Status(StatusCode::FORBIDDEN)
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ApiErrorKind::Transport => write!(f, "transport error: {}", self.error),
            ApiErrorKind::Status(code) => write!(f, "server rejected request ({code}): {}", self.error),
            ApiErrorKind::Decode => write!(f, "unexpected response shape: {}", self.error),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.error.source()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::decode(err)
        } else if let Some(code) = err.status() {
            ApiError::status(code, err)
        } else {
            ApiError::transport(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_auth_unauthorized() {
        let err = ApiError::status(StatusCode::UNAUTHORIZED, anyhow::anyhow!("no token"));
        assert!(err.is_auth());
    }

    #[test]
    fn test_is_auth_forbidden() {
        let err = ApiError::forbidden(anyhow::anyhow!("role not permitted"));
        assert!(err.is_auth());
    }

    #[test]
    fn test_is_auth_other_status() {
        let err = ApiError::status(StatusCode::UNPROCESSABLE_ENTITY, anyhow::anyhow!("bad dto"));
        assert!(!err.is_auth());
    }

    #[test]
    fn test_is_auth_transport() {
        let err = ApiError::transport(anyhow::anyhow!("connection refused"));
        assert!(!err.is_auth());
    }

    #[test]
    fn test_status_code_accessor() {
        let err = ApiError::status(StatusCode::NOT_FOUND, anyhow::anyhow!("missing"));
        assert_eq!(err.status_code(), Some(StatusCode::NOT_FOUND));

        let err = ApiError::decode(anyhow::anyhow!("truncated body"));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::status(StatusCode::BAD_REQUEST, anyhow::anyhow!("name required"));
        let rendered = err.to_string();
        assert!(rendered.contains("400"));
        assert!(rendered.contains("name required"));
    }
}
