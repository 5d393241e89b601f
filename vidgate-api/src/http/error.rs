// HTTP error handling

use axum::{
    extract::{multipart::MultipartError, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use vidgate_media_providers::VimeoError;

use super::validation::ValidationError;

/// Result type for HTTP handlers
pub type AppResult<T> = Result<T, AppError>;

/// Application error with HTTP status code
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {}

/// Error response JSON structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub status: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status;
        let body = Json(ErrorResponse {
            detail: self.message,
            status: status.as_u16(),
        });

        (status, body).into_response()
    }
}

/// Convert provider errors to HTTP errors
///
/// The client has already logged upstream failures; this only picks the
/// local status and the detail shown to the caller.
impl From<VimeoError> for AppError {
    fn from(err: VimeoError) -> Self {
        match err {
            VimeoError::Unauthorized => Self::new(StatusCode::UNAUTHORIZED, err.to_string()),
            VimeoError::Forbidden => Self::new(StatusCode::FORBIDDEN, err.to_string()),
            VimeoError::NotFound => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            VimeoError::RateLimited => Self::new(StatusCode::TOO_MANY_REQUESTS, err.to_string()),
            VimeoError::Upstream { .. } => Self::new(StatusCode::BAD_GATEWAY, err.to_string()),
            VimeoError::Network(_) => {
                Self::new(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
            }
            VimeoError::Parse(_) | VimeoError::ResponseTooLarge { .. } => {
                Self::new(StatusCode::BAD_GATEWAY, "Invalid response from Vimeo")
            }
            VimeoError::InvalidInput(msg) => Self::unprocessable(msg),
            VimeoError::InvalidConfig(msg) | VimeoError::InvalidHeader(msg) => {
                tracing::error!("Provider client misconfigured: {}", msg);
                Self::internal_server_error("Internal server error")
            }
        }
    }
}

/// Convert validation errors to HTTP errors
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::unprocessable(err.to_string())
    }
}

/// Malformed query strings are validation failures, not bad requests
impl From<QueryRejection> for AppError {
    fn from(err: QueryRejection) -> Self {
        Self::unprocessable(err.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        Self::new(err.status(), err.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: VimeoError) -> (StatusCode, String) {
        let app: AppError = err.into();
        (app.status, app.message)
    }

    #[test]
    fn test_vimeo_error_mapping() {
        assert_eq!(
            status_of(VimeoError::Unauthorized),
            (StatusCode::UNAUTHORIZED, "Invalid Vimeo Token".to_string())
        );
        assert_eq!(
            status_of(VimeoError::Forbidden),
            (StatusCode::FORBIDDEN, "Permission Denied".to_string())
        );
        assert_eq!(
            status_of(VimeoError::NotFound),
            (StatusCode::NOT_FOUND, "Resource Not Found".to_string())
        );
        assert_eq!(
            status_of(VimeoError::RateLimited),
            (StatusCode::TOO_MANY_REQUESTS, "Rate Limit Exceeded".to_string())
        );
        assert_eq!(
            status_of(VimeoError::Network("dns failure".to_string())),
            (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable".to_string())
        );
        assert_eq!(
            status_of(VimeoError::Parse("eof".to_string())).0,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(VimeoError::InvalidConfig("x".to_string())).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_error_embeds_body() {
        let (status, message) = status_of(VimeoError::from_status(
            StatusCode::SERVICE_UNAVAILABLE,
            "maintenance".to_string(),
        ));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(message, "Vimeo API Error: maintenance");
    }

    #[test]
    fn test_validation_error_is_unprocessable() {
        let app: AppError = ValidationError::Required("q").into();
        assert_eq!(app.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(app.message, "Field is required: q");
    }
}
