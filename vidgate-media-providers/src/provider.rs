//! Provider interface consumed by the HTTP layer

use async_trait::async_trait;
use bytes::Bytes;
use vidgate_core::models::{PlayVideoResponse, UploadResponse, Video, VideoList, VideoSort};

use crate::vimeo::VimeoError;

/// Operations the gateway forwards to the hosted video provider.
///
/// All results are already normalized into the local schema.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    async fn get_videos(
        &self,
        page: u32,
        per_page: u32,
        sort: Option<VideoSort>,
    ) -> Result<VideoList, VimeoError>;

    async fn search_videos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<VideoList, VimeoError>;

    async fn get_video(&self, video_id: &str) -> Result<Video, VimeoError>;

    async fn upload_video(&self, name: &str, content: Bytes) -> Result<UploadResponse, VimeoError>;

    async fn play_video(&self, video_id: &str) -> Result<PlayVideoResponse, VimeoError>;
}
