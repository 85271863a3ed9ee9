//! Unified error handling for the client flows.
//!
//! Failures fall into three groups (see [`ApiError`]): client-side
//! validation that never reaches the network, structured backend
//! rejections, and transport failures. Controllers catch everything at
//! the mutation boundary and convert it into a notification; nothing
//! propagates as an unhandled failure.

use thiserror::Error;

use crate::api::types::ErrorPayload;

/// Errors produced by the API client and the flow controllers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed before a response was obtained.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request with a non-2xx status.
    #[error("API error (status {status})")]
    Backend { status: u16, payload: ErrorPayload },

    /// Client-side validation failed; no request was issued.
    #[error("validation error: {0}")]
    Validation(String),

    /// The client was constructed from invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// The backend error payload, when this is a backend rejection.
    #[must_use]
    pub const fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Backend { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = ApiError::Backend {
            status: 400,
            payload: ErrorPayload::from_body("oops"),
        };
        assert_eq!(err.to_string(), "API error (status 400)");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ApiError::Validation("비밀번호가 일치하지 않습니다.".to_string());
        assert_eq!(
            err.to_string(),
            "validation error: 비밀번호가 일치하지 않습니다."
        );
    }
}
