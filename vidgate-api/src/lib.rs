// VidGate API Library
//
// Provides the HTTP surface of the gateway

pub mod http;

// Re-export commonly used types
pub use http::{create_router, AppState, GatewayService};
