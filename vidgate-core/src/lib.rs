// VidGate Core
//
// Shared foundation for the gateway crates:
// - config: application configuration (file + environment)
// - logging: tracing subscriber setup
// - bootstrap: startup-time config discovery and validation
// - models: the stable local video schema returned to callers

pub mod bootstrap;
pub mod config;
pub mod logging;
pub mod models;

pub use config::Config;
