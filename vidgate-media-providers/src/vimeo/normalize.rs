//! Vimeo record normalization
//!
//! Maps provider JSON onto the local schema. Every function here is pure and
//! total: a missing or mistyped field falls back to its default instead of
//! failing.

use serde_json::Value;
use vidgate_core::models::{
    PlayVideoResponse, UploadResponse, Video, VideoList, DEFAULT_PAGE, DEFAULT_PER_PAGE, UNTITLED,
};

fn str_field<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    data.get(key).and_then(Value::as_str)
}

fn nested_str<'a>(data: &'a Value, outer: &str, inner: &str) -> Option<&'a str> {
    data.get(outer)
        .and_then(|v| v.get(inner))
        .and_then(Value::as_str)
}

/// Last path segment of the record's `uri`, e.g. `/videos/12345` -> `12345`.
#[must_use]
pub fn video_id(data: &Value) -> String {
    str_field(data, "uri")
        .and_then(|uri| uri.rsplit('/').next())
        .unwrap_or_default()
        .to_string()
}

fn name(data: &Value) -> String {
    str_field(data, "name").unwrap_or(UNTITLED).to_string()
}

fn link(data: &Value) -> String {
    str_field(data, "link").unwrap_or_default().to_string()
}

fn duration(data: &Value) -> u64 {
    data.get("duration").and_then(Value::as_u64).unwrap_or(0)
}

fn embed_html(data: &Value) -> Option<String> {
    nested_str(data, "embed", "html").map(str::to_string)
}

#[must_use]
pub fn normalize_video(data: &Value) -> Video {
    Video {
        id: video_id(data),
        name: name(data),
        description: str_field(data, "description").map(str::to_string),
        duration: duration(data),
        link: link(data),
        embed_html: embed_html(data),
        pictures: data.get("pictures").filter(|p| !p.is_null()).cloned(),
    }
}

/// Normalize a paginated listing. Pagination falls back to page 1 of 25
/// with a total of 0 when Vimeo leaves it out.
#[must_use]
pub fn normalize_video_list(data: &Value) -> VideoList {
    let videos = data
        .get("data")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(normalize_video).collect())
        .unwrap_or_default();

    let as_u32 = |key: &str| {
        data.get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };

    VideoList {
        data: videos,
        page: as_u32("page").unwrap_or(DEFAULT_PAGE),
        per_page: as_u32("per_page").unwrap_or(DEFAULT_PER_PAGE),
        total: data.get("total").and_then(Value::as_u64).unwrap_or(0),
    }
}

/// Normalize the record returned when a video is created for upload.
#[must_use]
pub fn normalize_upload(data: &Value) -> UploadResponse {
    UploadResponse {
        id: video_id(data),
        name: name(data),
        link: link(data),
        upload_link: nested_str(data, "upload", "upload_link").map(str::to_string),
        status: nested_str(data, "upload", "status").map(str::to_string),
    }
}

#[must_use]
pub fn normalize_playback(data: &Value) -> PlayVideoResponse {
    PlayVideoResponse {
        id: video_id(data),
        name: name(data),
        link: link(data),
        embed_html: embed_html(data),
        player_embed_url: str_field(data, "player_embed_url").map(str::to_string),
        duration: duration(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_video_id_from_uri() {
        assert_eq!(video_id(&json!({"uri": "/videos/12345"})), "12345");
        assert_eq!(video_id(&json!({"uri": "12345"})), "12345");
        assert_eq!(video_id(&json!({"uri": "/videos/"})), "");
        assert_eq!(video_id(&json!({})), "");
        assert_eq!(video_id(&json!({"uri": null})), "");
    }

    #[test]
    fn test_normalize_full_record() {
        let record = json!({
            "uri": "/videos/76979871",
            "name": "Sunset",
            "description": "Shot on the pier",
            "duration": 125,
            "link": "https://vimeo.com/76979871",
            "embed": {"html": "<iframe src=\"https://player.vimeo.com/video/76979871\"></iframe>"},
            "pictures": {"active": true, "type": "custom", "sizes": [], "resource_key": "k"},
            "privacy": {"view": "anybody"}
        });

        let video = normalize_video(&record);
        assert_eq!(video.id, "76979871");
        assert_eq!(video.name, "Sunset");
        assert_eq!(video.description.as_deref(), Some("Shot on the pier"));
        assert_eq!(video.duration, 125);
        assert_eq!(video.link, "https://vimeo.com/76979871");
        assert!(video.embed_html.unwrap().starts_with("<iframe"));
        assert_eq!(video.pictures.unwrap()["resource_key"], "k");
    }

    #[test]
    fn test_normalize_empty_record_uses_defaults() {
        let video = normalize_video(&json!({}));
        assert_eq!(video.id, "");
        assert_eq!(video.name, "Untitled");
        assert_eq!(video.description, None);
        assert_eq!(video.duration, 0);
        assert_eq!(video.link, "");
        assert_eq!(video.embed_html, None);
        assert_eq!(video.pictures, None);
    }

    #[test]
    fn test_normalize_tolerates_nulls_and_wrong_types() {
        let video = normalize_video(&json!({
            "uri": "/videos/3",
            "name": null,
            "description": null,
            "duration": "long",
            "link": 7,
            "embed": {"html": null},
            "pictures": null
        }));
        assert_eq!(video.id, "3");
        assert_eq!(video.name, "Untitled");
        assert_eq!(video.description, None);
        assert_eq!(video.duration, 0);
        assert_eq!(video.link, "");
        assert_eq!(video.embed_html, None);
        assert_eq!(video.pictures, None);
    }

    #[test]
    fn test_normalize_never_fails_on_any_missing_subset() {
        let full = json!({
            "uri": "/videos/9",
            "name": "N",
            "description": "D",
            "duration": 5,
            "link": "L",
            "embed": {"html": "H"},
            "pictures": {"active": false}
        });
        let keys = ["uri", "name", "description", "duration", "link", "embed", "pictures"];

        for mask in 0u32..(1 << keys.len()) {
            let mut record = full.clone();
            let obj = record.as_object_mut().unwrap();
            for (bit, key) in keys.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    obj.remove(*key);
                }
            }

            let video = normalize_video(&record);
            let removed = |key: &str| {
                let bit = keys.iter().position(|k| *k == key).unwrap();
                mask & (1 << bit) != 0
            };
            assert_eq!(video.id, if removed("uri") { "" } else { "9" });
            assert_eq!(video.name, if removed("name") { "Untitled" } else { "N" });
            assert_eq!(video.duration, if removed("duration") { 0 } else { 5 });
            assert_eq!(video.link, if removed("link") { "" } else { "L" });
            assert_eq!(video.description.is_none(), removed("description"));
            assert_eq!(video.embed_html.is_none(), removed("embed"));
            assert_eq!(video.pictures.is_none(), removed("pictures"));
        }
    }

    #[test]
    fn test_normalize_list_defaults() {
        let list = normalize_video_list(&json!({}));
        assert!(list.data.is_empty());
        assert_eq!(list.page, 1);
        assert_eq!(list.per_page, 25);
        assert_eq!(list.total, 0);
    }

    #[test]
    fn test_normalize_list_keeps_order_and_paging() {
        let list = normalize_video_list(&json!({
            "total": 42,
            "page": 3,
            "per_page": 2,
            "data": [{"uri": "/videos/5"}, {"uri": "/videos/4", "name": "Four"}]
        }));
        assert_eq!(list.page, 3);
        assert_eq!(list.per_page, 2);
        assert_eq!(list.total, 42);
        let ids: Vec<_> = list.data.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["5", "4"]);
        assert_eq!(list.data[1].name, "Four");
    }

    #[test]
    fn test_normalize_upload() {
        let upload = normalize_upload(&json!({
            "uri": "/videos/888",
            "name": "Raw",
            "link": "https://vimeo.com/888",
            "upload": {
                "status": "in_progress",
                "upload_link": "https://files.tus.vimeo.com/files/abc",
                "approach": "tus",
                "size": 10
            }
        }));
        assert_eq!(upload.id, "888");
        assert_eq!(upload.name, "Raw");
        assert_eq!(upload.upload_link.as_deref(), Some("https://files.tus.vimeo.com/files/abc"));
        assert_eq!(upload.status.as_deref(), Some("in_progress"));

        let bare = normalize_upload(&json!({"uri": "/videos/1"}));
        assert_eq!(bare.upload_link, None);
        assert_eq!(bare.status, None);
    }

    #[test]
    fn test_normalize_playback() {
        let play = normalize_playback(&json!({
            "uri": "/videos/77",
            "name": "Talk",
            "link": "https://vimeo.com/77",
            "duration": 600,
            "player_embed_url": "https://player.vimeo.com/video/77",
            "embed": {"html": "<iframe></iframe>"}
        }));
        assert_eq!(play.id, "77");
        assert_eq!(play.duration, 600);
        assert_eq!(play.player_embed_url.as_deref(), Some("https://player.vimeo.com/video/77"));
        assert_eq!(play.embed_html.as_deref(), Some("<iframe></iframe>"));

        let bare = normalize_playback(&json!({}));
        assert_eq!(bare.name, "Untitled");
        assert_eq!(bare.player_embed_url, None);
    }
}
