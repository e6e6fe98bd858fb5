//! API Error Types

use crate::models::Envelope;

/// Errors from the remote API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, CORS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// The server answered `"status": false` in the response envelope.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// No bearer token in localStorage.
    #[error("Authentication token not found")]
    MissingToken,

    /// The selected upload could not be read.
    #[error("failed to read file: {0}")]
    File(String),
}

impl ApiError {
    /// Error for a non-2xx reply. A body carrying a `"status": false`
    /// envelope is an answer from the server and becomes `Rejected`.
    pub fn from_failed_response(status: u16, body: String) -> Self {
        match serde_json::from_str::<Envelope<serde_json::Value>>(&body) {
            Ok(envelope) if !envelope.status => ApiError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| format!("request refused with status {}", status)),
            ),
            _ => ApiError::Status { status, body },
        }
    }

    /// Transport-level failure rather than an answer from the server
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Request(_) | ApiError::Status { .. } | ApiError::File(_))
    }

    /// Text shown to the officer: `rejected` when the server refused,
    /// `network` when it could not be reached.
    pub fn user_message(&self, rejected: &str, network: &str) -> String {
        match self {
            ApiError::MissingToken => self.to_string(),
            e if e.is_network() => network.to_string(),
            _ => rejected.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_network() {
        assert!(ApiError::Status { status: 502, body: String::new() }.is_network());
        assert!(ApiError::File("closed".into()).is_network());
        assert!(!ApiError::Rejected("no".into()).is_network());
        assert!(!ApiError::MissingToken.is_network());
    }

    #[test]
    fn test_user_message() {
        let rejected = "Failed to fetch applications.";
        let network = "Network error. Please try again.";
        assert_eq!(ApiError::Rejected("x".into()).user_message(rejected, network), rejected);
        assert_eq!(
            ApiError::Status { status: 500, body: String::new() }.user_message(rejected, network),
            network
        );
        assert_eq!(
            ApiError::MissingToken.user_message(rejected, network),
            "Authentication token not found"
        );
    }

    #[test]
    fn test_failed_response_with_envelope_is_rejected() {
        let err = ApiError::from_failed_response(
            401,
            r#"{"status":false,"message":"Unauthorized"}"#.to_string(),
        );
        match &err {
            ApiError::Rejected(msg) => assert_eq!(msg, "Unauthorized"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            err.user_message("Failed to fetch applications.", "Network error. Please try again."),
            "Failed to fetch applications."
        );

        let bare = ApiError::from_failed_response(500, r#"{"status":false}"#.to_string());
        assert!(matches!(bare, ApiError::Rejected(_)));
    }

    #[test]
    fn test_failed_response_without_envelope_keeps_status() {
        let html = ApiError::from_failed_response(502, "<html>Bad Gateway</html>".to_string());
        assert!(matches!(html, ApiError::Status { status: 502, .. }));
        assert!(html.is_network());

        let empty = ApiError::from_failed_response(500, String::new());
        assert!(matches!(empty, ApiError::Status { status: 500, .. }));
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::MissingToken.to_string(), "Authentication token not found");
        assert_eq!(
            ApiError::Status { status: 404, body: "missing".into() }.to_string(),
            "API error (404): missing"
        );
    }
}
