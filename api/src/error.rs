use serde::Deserialize;

/// Error body shape the backend uses for every rejection.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Failure of a backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(String),

    /// The backend rejected the request. `detail` carries the human-readable
    /// message from the response body when one was present.
    #[error("backend rejected request ({status}): {detail}")]
    Api { status: u16, detail: String },
}

impl ApiError {
    /// Build an [`ApiError::Api`] from a status code and raw response body,
    /// extracting the `{"detail": "..."}` message when the body carries one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.detail,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => format!("HTTP {status}"),
        };
        ApiError::Api { status, detail }
    }

    /// Backend-provided message, if the failure was a backend rejection.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Api { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Message to show the user: the backend's detail when present,
    /// otherwise the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_extracted_from_json_body() {
        let err = ApiError::from_response(401, r#"{"detail": "Invalid email or password"}"#);
        assert_eq!(err.detail(), Some("Invalid email or password"));
        assert_eq!(err.user_message("fallback"), "Invalid email or password");
    }

    #[test]
    fn test_raw_body_used_when_not_json() {
        let err = ApiError::from_response(502, "Bad Gateway");
        assert_eq!(err.detail(), Some("Bad Gateway"));
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let err = ApiError::from_response(500, "  ");
        assert_eq!(err.detail(), Some("HTTP 500"));
    }

    #[test]
    fn test_user_message_fallback_for_decode_errors() {
        let err = ApiError::Decode("truncated".into());
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
    }
}
