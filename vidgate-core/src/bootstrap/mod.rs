//! Startup helpers shared by the server binary

pub mod config;

pub use config::load_config;
