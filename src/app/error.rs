//! # Catalog API Errors
//!
//! Every failure coming out of the catalog service, whether the request never
//! reached the backend or the backend refused it, is folded into [`ApiError`].

use thiserror::Error;

/// Uniform error returned by every catalog operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request did not produce a usable response
    #[error("{message}")]
    Transport { message: String },

    /// The backend answered with a non-2xx status
    #[error("Error Code: {status}\nMessage: {message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// HTTP status, if the backend produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }

    /// Check if the backend reported the record as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::server(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ),
            None => Self::transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(format!("Invalid response body: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_should_compose_status_and_message() {
        let err = ApiError::server(404, "Not Found");
        assert_eq!(err.to_string(), "Error Code: 404\nMessage: Not Found");
    }

    #[test]
    fn transport_error_should_keep_raw_message() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn not_found_should_only_match_404() {
        assert!(ApiError::server(404, "").is_not_found());
        assert!(!ApiError::server(400, "").is_not_found());
        assert!(!ApiError::transport("timeout").is_not_found());
    }

    #[test]
    fn json_errors_should_become_transport_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ApiError::from(json_err);
        assert!(matches!(err, ApiError::Transport { .. }));
        assert!(err.to_string().starts_with("Invalid response body"));
    }
}
