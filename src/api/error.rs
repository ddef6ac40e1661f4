use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a single API call.
///
/// Screens treat every variant the same way; the split exists for logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("could not encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let err = ApiError::Status {
            status: 404,
            body: r#"{"detail":"Patient not found"}"#.to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_transport_from_http_error() {
        let err: ApiError = HttpError::Timeout("30s".to_string()).into();
        assert!(!err.is_not_found());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "transport failure: Request timeout: 30s");
    }

    #[test]
    fn test_decode_has_source() {
        use std::error::Error as _;

        let json_err = serde_json::from_str::<i64>("nope").unwrap_err();
        let err = ApiError::Decode(json_err);
        assert!(err.source().is_some());
    }
}
