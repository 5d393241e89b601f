//! Local video schema
//!
//! These shapes are what callers of the gateway see. They are independent of
//! upstream field names and are built fresh for every response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default page returned when the provider omits pagination data
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size, both for requests and for provider responses without one
pub const DEFAULT_PER_PAGE: u32 = 25;
/// Name used for videos the provider returns without one
pub const UNTITLED: &str = "Untitled";

/// A single video as exposed by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration: u64,
    pub link: String,
    pub embed_html: Option<String>,
    /// Raw thumbnail metadata, passed through unchanged
    pub pictures: Option<Value>,
}

impl Video {
    /// Decode the passthrough thumbnail metadata into a typed [`Picture`].
    ///
    /// Returns `None` when there are no pictures or they do not have the
    /// expected shape.
    #[must_use]
    pub fn picture(&self) -> Option<Picture> {
        self.pictures
            .as_ref()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Thumbnail metadata attached to a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub active: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub sizes: Vec<serde_json::Map<String, Value>>,
    pub resource_key: String,
}

/// One page of a video listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoList {
    pub data: Vec<Video>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

/// Result of creating a video and sending its bytes upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: String,
    pub name: String,
    pub link: String,
    pub upload_link: Option<String>,
    /// Upload state reported by the provider, e.g. `in_progress` or `complete`
    pub status: Option<String>,
}

/// Everything a client needs to start playback of a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayVideoResponse {
    pub id: String,
    pub name: String,
    pub link: String,
    pub embed_html: Option<String>,
    pub player_embed_url: Option<String>,
    pub duration: u64,
}

/// Sort keys accepted by the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoSort {
    Date,
    Alphabetical,
    Duration,
    LastUserAction,
}

impl VideoSort {
    /// Value sent upstream in the `sort` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Alphabetical => "alphabetical",
            Self::Duration => "duration",
            Self::LastUserAction => "last_user_action",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_video_serializes_nulls() {
        let video = Video {
            id: "1".to_string(),
            name: "Clip".to_string(),
            description: None,
            duration: 0,
            link: String::new(),
            embed_html: None,
            pictures: None,
        };

        assert_eq!(
            serde_json::to_value(&video).unwrap(),
            json!({
                "id": "1",
                "name": "Clip",
                "description": null,
                "duration": 0,
                "link": "",
                "embed_html": null,
                "pictures": null
            })
        );
    }

    #[test]
    fn test_picture_decodes_from_passthrough() {
        let video = Video {
            id: "1".to_string(),
            name: UNTITLED.to_string(),
            description: None,
            duration: 0,
            link: String::new(),
            embed_html: None,
            pictures: Some(json!({
                "uri": "/videos/1/pictures/9",
                "active": true,
                "type": "custom",
                "sizes": [{"width": 100, "height": 75, "link": "https://i.vimeocdn.com/1.jpg"}],
                "resource_key": "abc123"
            })),
        };

        let picture = video.picture().unwrap();
        assert!(picture.active);
        assert_eq!(picture.kind, "custom");
        assert_eq!(picture.sizes.len(), 1);
        assert_eq!(picture.sizes[0]["width"], json!(100));
        assert_eq!(picture.resource_key, "abc123");
    }

    #[test]
    fn test_picture_none_for_unexpected_shape() {
        let video = Video {
            id: "1".to_string(),
            name: UNTITLED.to_string(),
            description: None,
            duration: 0,
            link: String::new(),
            embed_html: None,
            pictures: Some(json!({"active": "yes"})),
        };

        assert!(video.picture().is_none());
    }

    #[test]
    fn test_sort_wire_names() {
        let parsed: VideoSort = serde_json::from_value(json!("last_user_action")).unwrap();
        assert_eq!(parsed, VideoSort::LastUserAction);
        assert_eq!(VideoSort::Alphabetical.as_str(), "alphabetical");
        assert!(serde_json::from_value::<VideoSort>(json!("plays")).is_err());
    }
}
