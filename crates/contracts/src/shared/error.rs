//! Errors produced by the external record and pricing collaborators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of an upstream fetch or format call.
///
/// The view surfaces every variant the same way (one message in the error
/// area); the variants exist for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Map a non-success HTTP status to an error, 404 becoming `NotFound`.
    pub fn from_status(status: u16, resource: &str, body: impl Into<String>) -> Self {
        if status == 404 {
            Self::NotFound(resource.to_string())
        } else {
            Self::Status {
                status,
                body: body.into(),
            }
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(
            FetchError::from_status(404, "Case 500xx", "missing"),
            FetchError::NotFound("Case 500xx".into())
        );
        assert_eq!(
            FetchError::from_status(503, "Case 500xx", "busy"),
            FetchError::Status {
                status: 503,
                body: "busy".into()
            }
        );
    }

    #[test]
    fn test_display() {
        let err = FetchError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(
            FetchError::network("offline").to_string(),
            "network error: offline"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err: FetchError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
