//! Video HTTP Routes
//!
//! Query parameters are validated here; everything else is delegated to the
//! configured [`VideoProvider`](vidgate_media_providers::VideoProvider).

use axum::{
    extract::{rejection::QueryRejection, Multipart, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde::Deserialize;
use vidgate_core::models::{
    PlayVideoResponse, UploadResponse, Video, VideoList, VideoSort, DEFAULT_PAGE, DEFAULT_PER_PAGE,
};

use super::{
    error::{AppError, AppResult},
    validation::{
        resolve_video_name, validate_page, validate_per_page, validate_search_query,
        validate_video_id, ValidationError,
    },
    AppState,
};

/// Build video routes (mounted under the configured prefix)
pub fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_videos))
        .route("/search", get(search_videos))
        .route("/upload", post(upload_video))
        .route("/{video_id}", get(get_video))
        .route("/{video_id}/play", get(play_video))
}

const fn default_page() -> u32 {
    DEFAULT_PAGE
}

const fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

#[derive(Debug, Deserialize)]
pub struct ListVideosQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    pub sort: Option<VideoSort>,
}

#[derive(Debug, Deserialize)]
pub struct SearchVideosQuery {
    pub q: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// GET / - List the account's videos
async fn list_videos(
    State(state): State<AppState>,
    query: Result<Query<ListVideosQuery>, QueryRejection>,
) -> AppResult<Json<VideoList>> {
    let Query(query) = query?;
    let page = validate_page(query.page)?;
    let per_page = validate_per_page(query.per_page)?;

    tracing::info!(page, per_page, sort = ?query.sort, "List videos request");

    let videos = state.provider.get_videos(page, per_page, query.sort).await?;
    Ok(Json(videos))
}

/// GET /search - Search the account's videos
async fn search_videos(
    State(state): State<AppState>,
    query: Result<Query<SearchVideosQuery>, QueryRejection>,
) -> AppResult<Json<VideoList>> {
    let Query(query) = query?;
    let q = validate_search_query(query.q.as_deref())?;
    let page = validate_page(query.page)?;
    let per_page = validate_per_page(query.per_page)?;

    tracing::info!(page, per_page, "Search videos request");

    let videos = state.provider.search_videos(q, page, per_page).await?;
    Ok(Json(videos))
}

/// GET /{video_id} - Fetch a single video
async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<Json<Video>> {
    let video_id = validate_video_id(&video_id)?;
    tracing::info!(video_id, "Get video request");

    let video = state.provider.get_video(video_id).await?;
    Ok(Json(video))
}

/// GET /{video_id}/play - Playback metadata for a video
async fn play_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<Json<PlayVideoResponse>> {
    let video_id = validate_video_id(&video_id)?;
    tracing::info!(video_id, "Play video request");

    let playback = state.provider.play_video(video_id).await?;
    Ok(Json(playback))
}

/// POST /upload - Upload a video file
///
/// Accepts multipart form data with:
/// - a required "file" part containing the video bytes
/// - an optional "name" part; defaults to the file name
async fn upload_video(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let mut name: Option<String> = None;
    let mut file: Option<(Option<String>, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                file = Some((file_name, field.bytes().await?));
            }
            Some("name") => {
                name = Some(field.text().await?);
            }
            other => {
                tracing::debug!("Ignoring unexpected multipart field: {:?}", other);
            }
        }
    }

    let Some((file_name, content)) = file else {
        return Err(ValidationError::Required("file").into());
    };
    if content.is_empty() {
        return Err(AppError::unprocessable("file must not be empty"));
    }

    let name = resolve_video_name(name.as_deref(), file_name.as_deref())?;
    tracing::info!(name = %name, size = content.len(), "Upload video request");

    let upload = state.provider.upload_video(&name, content).await?;
    Ok((StatusCode::CREATED, Json(upload)))
}
