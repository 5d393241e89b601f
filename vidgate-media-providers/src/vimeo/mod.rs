//! Vimeo Provider
//!
//! HTTP client for the Vimeo REST API (v3.4) plus the normalization that
//! turns Vimeo records into the local video schema.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::VimeoClient;
pub use error::VimeoError;
