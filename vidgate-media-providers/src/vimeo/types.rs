//! Vimeo HTTP API Types
//!
//! Request bodies and protocol constants. Responses are read as
//! `serde_json::Value` and normalized in [`super::normalize`], since Vimeo
//! omits fields freely and normalization must never fail on a missing one.

use serde::Serialize;

/// Versioned media type requested on every API call
pub const VIMEO_ACCEPT: &str = "application/vnd.vimeo.*+json;version=3.4";

/// tus protocol version used for the upload PATCH
pub const TUS_RESUMABLE: &str = "1.0.0";

/// Content type required by tus for upload chunks
pub const TUS_CONTENT_TYPE: &str = "application/offset+octet-stream";

/// Body of `POST /me/videos` when creating a video for a tus upload
#[derive(Debug, Serialize)]
pub struct CreateVideoRequest<'a> {
    pub upload: UploadApproach,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UploadApproach {
    pub approach: &'static str,
    pub size: u64,
}

impl UploadApproach {
    #[must_use]
    pub const fn tus(size: u64) -> Self {
        Self {
            approach: "tus",
            size,
        }
    }
}
