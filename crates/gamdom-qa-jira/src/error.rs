//! Error types for JIRA integration

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// Non-2xx response from the REST API
    #[error("Failed to {operation}: {} {body}", status.as_u16())]
    Api {
        operation: String,
        status: StatusCode,
        body: String,
    },
}

impl Error {
    /// HTTP status of an API failure, if this is one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_carries_status_and_body() {
        let err = Error::Api {
            operation: "get issue DEV-7".to_string(),
            status: StatusCode::NOT_FOUND,
            body: "Issue does not exist".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to get issue DEV-7: 404 Issue does not exist");
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_non_api_error_has_no_status() {
        let invalid = reqwest::header::HeaderValue::from_str("Basic \n").unwrap_err();
        let err = Error::Header(invalid);
        assert!(err.status().is_none());
        assert!(!err.is_not_found());
    }
}
