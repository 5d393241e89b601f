//! Liveness probe
//!
//! Answers without touching the provider, so it stays green while Vimeo is
//! unreachable.

use axum::{response::IntoResponse, routing::get, Router};

use crate::http::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

pub async fn health_check() -> impl IntoResponse {
    "OK"
}
