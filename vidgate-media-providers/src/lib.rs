// VidGate Provider Clients
//
// This crate contains the HTTP client for the hosted video provider and the
// interface the HTTP layer calls through.
//
// Architecture:
// - provider: `VideoProvider` trait, results already in the local schema
// - vimeo: Vimeo REST client, error mapping, record normalization

pub mod provider;
pub mod vimeo;

// Re-export client types for convenience
pub use provider::VideoProvider;
pub use vimeo::{VimeoClient, VimeoError};
