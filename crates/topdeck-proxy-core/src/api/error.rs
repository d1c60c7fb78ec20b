use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("TopDeck API error: {status} - {}", truncate_body(.body))]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Truncate a response body to avoid logging excessive data
fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
}

impl ApiError {
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        ApiError::Upstream {
            status: status.as_u16(),
            body,
        }
    }

    /// Upstream HTTP status, if the failure came from a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Upstream { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_includes_status_and_body() {
        let err = ApiError::from_status(reqwest::StatusCode::TOO_MANY_REQUESTS, "rate limited".to_string());
        assert_eq!(err.to_string(), "TopDeck API error: 429 - rate limited");
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_long_body_is_truncated_in_message_only() {
        let body = "x".repeat(MAX_ERROR_BODY_LENGTH + 20);
        let err = ApiError::from_status(reqwest::StatusCode::BAD_GATEWAY, body.clone());

        let message = err.to_string();
        assert!(message.contains("(truncated, 520 total bytes)"));
        match err {
            ApiError::Upstream { body: raw, .. } => assert_eq!(raw, body),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // 'é' is two bytes, so byte 500 falls inside a character
        let body = format!("a{}", "é".repeat(300));
        let truncated = truncate_body(&body);
        assert!(truncated.starts_with('a'));
        assert!(truncated.contains("truncated"));
    }
}
