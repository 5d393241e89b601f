// Module: http
// HTTP/JSON REST API in front of the video provider

pub mod error;
pub mod health;
pub mod validation;
pub mod videos;

use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;
use vidgate_core::config::ServerConfig;
use vidgate_media_providers::VideoProvider;

pub use error::{AppError, AppResult};

/// Shared application state
///
/// Immutable for the life of the process; handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn VideoProvider>,
}

/// The gateway service: the router behind trailing-slash normalization
pub type GatewayService = NormalizePath<Router>;

/// Create the HTTP router with all routes
///
/// `{prefix}/` and `{prefix}` reach the same handler; the trailing slash is
/// trimmed before routing.
pub fn create_router(provider: Arc<dyn VideoProvider>, server: &ServerConfig) -> GatewayService {
    let state = AppState { provider };

    let prefix = server.route_prefix.trim_end_matches('/');
    let router = Router::new()
        // Health check endpoints (for monitoring probes)
        .merge(health::create_health_router());

    // Nesting at the root is not allowed, so an empty prefix merges instead
    let router = if prefix.is_empty() {
        router.merge(videos::video_routes())
    } else {
        router.nest(prefix, videos::video_routes())
    };

    // Apply layers before state
    let router = router
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Apply state to all routes (must be last)
    NormalizePath::trim_trailing_slash(router.with_state(state))
}
