//! Vimeo Provider Client Error Types

use reqwest::StatusCode;
use thiserror::Error;

/// Maximum response body size for Vimeo HTTP calls (16 MB).
pub const MAX_RESPONSE_SIZE: usize = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum VimeoError {
    #[error("Invalid Vimeo Token")]
    Unauthorized,

    #[error("Permission Denied")]
    Forbidden,

    #[error("Resource Not Found")]
    NotFound,

    #[error("Rate Limit Exceeded")]
    RateLimited,

    /// Any other non-success status; carries the upstream body verbatim
    #[error("Vimeo API Error: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Response too large ({size} bytes, max {MAX_RESPONSE_SIZE})")]
    ResponseTooLarge { size: u64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl VimeoError {
    /// Map a non-success upstream status to its error.
    #[must_use]
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            _ => Self::Upstream { status, body },
        }
    }
}

/// Read a response body with size limit and deserialize as JSON.
///
/// Checks `Content-Length` hint first (if available), then enforces the
/// limit on the actual body bytes before deserializing.
pub async fn json_with_limit<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, VimeoError> {
    if let Some(cl) = response.content_length() {
        if cl > MAX_RESPONSE_SIZE as u64 {
            return Err(VimeoError::ResponseTooLarge { size: cl });
        }
    }
    let bytes = response.bytes().await?;
    if bytes.len() > MAX_RESPONSE_SIZE {
        return Err(VimeoError::ResponseTooLarge { size: bytes.len() as u64 });
    }
    serde_json::from_slice(&bytes).map_err(Into::into)
}

impl From<reqwest::Error> for VimeoError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for VimeoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for VimeoError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_known_codes() {
        assert!(matches!(
            VimeoError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            VimeoError::Unauthorized
        ));
        assert!(matches!(
            VimeoError::from_status(StatusCode::FORBIDDEN, String::new()),
            VimeoError::Forbidden
        ));
        assert!(matches!(
            VimeoError::from_status(StatusCode::NOT_FOUND, String::new()),
            VimeoError::NotFound
        ));
        assert!(matches!(
            VimeoError::from_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            VimeoError::RateLimited
        ));
    }

    #[test]
    fn test_from_status_other_keeps_body() {
        let err = VimeoError::from_status(StatusCode::BAD_REQUEST, "{\"error\":\"bad\"}".to_string());
        assert!(matches!(err, VimeoError::Upstream { status: StatusCode::BAD_REQUEST, .. }));
        assert_eq!(err.to_string(), "Vimeo API Error: {\"error\":\"bad\"}");
    }

    #[test]
    fn test_error_display_fixed_messages() {
        assert_eq!(VimeoError::Unauthorized.to_string(), "Invalid Vimeo Token");
        assert_eq!(VimeoError::Forbidden.to_string(), "Permission Denied");
        assert_eq!(VimeoError::NotFound.to_string(), "Resource Not Found");
        assert_eq!(VimeoError::RateLimited.to_string(), "Rate Limit Exceeded");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: VimeoError = json_err.into();
        assert!(matches!(err, VimeoError::Parse(_)));
    }

    #[test]
    fn test_response_too_large_display() {
        let msg = VimeoError::ResponseTooLarge { size: 20_000_000 }.to_string();
        assert!(msg.contains("20000000"));
        assert!(msg.contains(&MAX_RESPONSE_SIZE.to_string()));
    }
}
