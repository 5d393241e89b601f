//! Vimeo HTTP Client
//!
//! Pure HTTP client for the Vimeo REST API. Every call carries the bearer
//! token and the versioned Accept header, is bounded by the configured
//! timeout, and has its failures translated into [`VimeoError`].

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, RequestBuilder, Response,
};
use serde_json::Value;
use tracing::{debug, error, info};
use vidgate_core::config::VimeoConfig;
use vidgate_core::models::{PlayVideoResponse, UploadResponse, Video, VideoList, VideoSort};

use super::error::{json_with_limit, VimeoError};
use super::normalize::{normalize_playback, normalize_upload, normalize_video, normalize_video_list};
use super::types::{CreateVideoRequest, UploadApproach, TUS_CONTENT_TYPE, TUS_RESUMABLE, VIMEO_ACCEPT};
use crate::provider::VideoProvider;

/// Everything except RFC 3986 unreserved characters is escaped in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode a string for use as a single path segment
fn encode_path_segment(s: &str) -> String {
    utf8_percent_encode(s, PATH_SEGMENT).to_string()
}

/// Vimeo HTTP Client
///
/// Holds one pooled `reqwest::Client`; each call takes its own connection
/// lease from the pool and returns it when the call finishes or fails.
pub struct VimeoClient {
    base_url: String,
    access_token: String,
    client: Client,
}

impl VimeoClient {
    /// Create a client from explicit configuration
    pub fn new(config: &VimeoConfig) -> Result<Self, VimeoError> {
        if config.access_token.trim().is_empty() {
            return Err(VimeoError::InvalidConfig("Missing access token".to_string()));
        }
        if config.base_url.trim().is_empty() {
            return Err(VimeoError::InvalidConfig("Missing base URL".to_string()));
        }

        let timeout = config.timeout();
        let client = Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| VimeoError::InvalidConfig(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            client,
        })
    }

    /// Build request headers
    fn build_headers(&self) -> Result<HeaderMap, VimeoError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("bearer {}", self.access_token))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(VIMEO_ACCEPT));
        Ok(headers)
    }

    /// Send a prepared request, translating transport and status failures.
    async fn send(&self, request: RequestBuilder) -> Result<Response, VimeoError> {
        let response = request.send().await.map_err(|e| {
            error!("Vimeo request error: {}", e);
            VimeoError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!(status = status.as_u16(), "Failed to read Vimeo error body: {}", e);
                String::new()
            }
        };
        error!(status = status.as_u16(), "Vimeo API Error: {}", body);
        Err(VimeoError::from_status(status, body))
    }

    /// Issue an authenticated call against `endpoint` and return the JSON body.
    ///
    /// `configure` attaches per-call options (query string, JSON body).
    async fn request<F>(&self, method: Method, endpoint: &str, configure: F) -> Result<Value, VimeoError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder + Send,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%method, %url, "Vimeo request");

        let request = configure(self.client.request(method, &url).headers(self.build_headers()?));
        let response = self.send(request).await?;

        json_with_limit(response).await.map_err(|e| {
            error!("Invalid response body from Vimeo: {}", e);
            e
        })
    }

    /// Send the raw bytes to a tus upload link in a single PATCH.
    async fn upload_content(&self, upload_link: &str, content: Bytes) -> Result<(), VimeoError> {
        debug!(upload_link, size = content.len(), "Uploading video content");

        let request = self
            .client
            .patch(upload_link)
            .header(ACCEPT, VIMEO_ACCEPT)
            .header("Tus-Resumable", TUS_RESUMABLE)
            .header("Upload-Offset", "0")
            .header(CONTENT_TYPE, TUS_CONTENT_TYPE)
            .body(content);

        self.send(request).await?;
        Ok(())
    }

    fn video_endpoint(video_id: &str) -> Result<String, VimeoError> {
        if video_id.is_empty() {
            return Err(VimeoError::InvalidInput("video id must not be empty".to_string()));
        }
        Ok(format!("/videos/{}", encode_path_segment(video_id)))
    }
}

#[async_trait]
impl VideoProvider for VimeoClient {
    /// List the authenticated user's videos
    async fn get_videos(
        &self,
        page: u32,
        per_page: u32,
        sort: Option<VideoSort>,
    ) -> Result<VideoList, VimeoError> {
        let mut params = vec![("page", page.to_string()), ("per_page", per_page.to_string())];
        if let Some(sort) = sort {
            params.push(("sort", sort.as_str().to_string()));
        }

        let data = self
            .request(Method::GET, "/me/videos", |req| req.query(&params))
            .await?;
        Ok(normalize_video_list(&data))
    }

    /// Search the authenticated user's videos
    async fn search_videos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<VideoList, VimeoError> {
        if query.is_empty() {
            return Err(VimeoError::InvalidInput("search query must not be empty".to_string()));
        }

        let params = [
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];

        let data = self
            .request(Method::GET, "/me/videos", |req| req.query(&params))
            .await?;
        Ok(normalize_video_list(&data))
    }

    async fn get_video(&self, video_id: &str) -> Result<Video, VimeoError> {
        let endpoint = Self::video_endpoint(video_id)?;
        let data = self.request(Method::GET, &endpoint, |req| req).await?;
        Ok(normalize_video(&data))
    }

    /// Create the video record, then push the bytes to its tus upload link
    async fn upload_video(&self, name: &str, content: Bytes) -> Result<UploadResponse, VimeoError> {
        let body = CreateVideoRequest {
            upload: UploadApproach::tus(content.len() as u64),
            name,
        };

        let data = self
            .request(Method::POST, "/me/videos", |req| req.json(&body))
            .await?;
        let upload = normalize_upload(&data);

        let Some(upload_link) = upload.upload_link.as_deref() else {
            error!(video_id = %upload.id, "Vimeo did not return an upload link");
            return Err(VimeoError::Upstream {
                status: reqwest::StatusCode::BAD_GATEWAY,
                body: "upload link missing from response".to_string(),
            });
        };

        self.upload_content(upload_link, content).await?;
        info!(video_id = %upload.id, "Video uploaded to Vimeo");
        Ok(upload)
    }

    async fn play_video(&self, video_id: &str) -> Result<PlayVideoResponse, VimeoError> {
        let endpoint = Self::video_endpoint(video_id)?;
        let data = self.request(Method::GET, &endpoint, |req| req).await?;
        Ok(normalize_playback(&data))
    }
}
