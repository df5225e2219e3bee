//! Request error type.

use http::StatusCode;

/// A search collaborator call that failed.
///
/// The `Display` text is surfaced verbatim in the error banner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("Search failed: server returned {status}")]
    Http { status: StatusCode, url: String },

    #[error("Search failed: request timed out")]
    Timeout,

    #[error("Search failed: {0}")]
    Transport(String),

    #[error("Search failed: unexpected response from server ({0})")]
    Decode(String),
}

impl RequestError {
    /// HTTP status, for failures that got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RequestError::Timeout
        } else if e.is_decode() {
            RequestError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            RequestError::Http {
                status,
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            RequestError::Transport(e.to_string())
        }
    }
}

impl From<finder_core::CoreError> for RequestError {
    fn from(e: finder_core::CoreError) -> Self {
        RequestError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RequestError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://localhost/api/search/".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Search failed: server returned 500 Internal Server Error"
        );
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(RequestError::Timeout.status(), None);
    }
}
