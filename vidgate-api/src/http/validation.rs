//! Input validation utilities for HTTP endpoints
//!
//! Everything here runs before the provider is called, so a rejected request
//! never produces an upstream call.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Bounds for request parameters
pub mod limits {
    /// Lowest page number
    pub const PAGE_MIN: u32 = 1;
    /// Smallest page size
    pub const PER_PAGE_MIN: u32 = 1;
    /// Largest page size the provider accepts
    pub const PER_PAGE_MAX: u32 = 100;
    /// Maximum video ID length
    pub const ID_MAX: usize = 64;
    /// Maximum video name length
    pub const VIDEO_NAME_MAX: usize = 128;
}

/// Regex patterns for validation
mod patterns {
    use super::{LazyLock, Regex};

    /// Valid video ID: alphanumeric, underscores, hyphens
    pub static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Invalid video_id regex")
    });

    /// Control characters that should be stripped
    pub static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").expect("Invalid control char regex")
    });
}

/// Validation error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Input too long: {field} exceeds {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("Out of range: {field} must be between {min} and {max} (got {actual})")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        actual: u32,
    },
    #[error("Invalid format: {field} contains invalid characters")]
    InvalidFormat { field: &'static str },
    #[error("Field is required: {0}")]
    Required(&'static str),
}

/// Result type for validation operations
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Sanitize a string by trimming whitespace and removing control characters
pub fn sanitize_string(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim();
    let has_control = patterns::CONTROL_CHARS.is_match(trimmed);

    if !has_control && trimmed.len() == input.len() {
        Cow::Borrowed(input)
    } else if !has_control {
        Cow::Owned(trimmed.to_string())
    } else {
        Cow::Owned(patterns::CONTROL_CHARS.replace_all(trimmed, "").into_owned())
    }
}

/// Validate a 1-based page number
pub fn validate_page(page: u32) -> ValidationResult<u32> {
    if page < limits::PAGE_MIN {
        return Err(ValidationError::OutOfRange {
            field: "page",
            min: limits::PAGE_MIN,
            max: u32::MAX,
            actual: page,
        });
    }
    Ok(page)
}

/// Validate a page size
pub fn validate_per_page(per_page: u32) -> ValidationResult<u32> {
    if !(limits::PER_PAGE_MIN..=limits::PER_PAGE_MAX).contains(&per_page) {
        return Err(ValidationError::OutOfRange {
            field: "per_page",
            min: limits::PER_PAGE_MIN,
            max: limits::PER_PAGE_MAX,
            actual: per_page,
        });
    }
    Ok(per_page)
}

/// Validate a search term
///
/// Only a missing or empty term is rejected; anything else is forwarded as given.
pub fn validate_search_query(query: Option<&str>) -> ValidationResult<&str> {
    match query {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(ValidationError::Required("q")),
    }
}

/// Validate a video ID taken from the request path
pub fn validate_video_id(video_id: &str) -> ValidationResult<&str> {
    if video_id.is_empty() {
        return Err(ValidationError::Required("video_id"));
    }

    if video_id.len() > limits::ID_MAX {
        return Err(ValidationError::TooLong {
            field: "video_id",
            max: limits::ID_MAX,
            actual: video_id.len(),
        });
    }

    if !patterns::VIDEO_ID.is_match(video_id) {
        return Err(ValidationError::InvalidFormat { field: "video_id" });
    }

    Ok(video_id)
}

/// Pick the name for an uploaded video.
///
/// Prefers an explicit name, then the uploaded file's name, then "Untitled".
pub fn resolve_video_name(name: Option<&str>, file_name: Option<&str>) -> ValidationResult<String> {
    let chosen = [name, file_name]
        .into_iter()
        .flatten()
        .map(sanitize_string)
        .find(|candidate| !candidate.is_empty())
        .map_or_else(
            || vidgate_core::models::UNTITLED.to_string(),
            Cow::into_owned,
        );

    let len = chosen.chars().count();
    if len > limits::VIDEO_NAME_MAX {
        return Err(ValidationError::TooLong {
            field: "name",
            max: limits::VIDEO_NAME_MAX,
            actual: len,
        });
    }

    Ok(chosen)
}
