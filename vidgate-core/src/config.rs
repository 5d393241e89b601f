use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub vimeo: VimeoConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub http_port: u16,
    /// Path the video routes are mounted under
    pub route_prefix: String,
    /// Upper bound for multipart upload bodies
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            http_port: 8080,
            route_prefix: "/api/videos".to_string(),
            max_upload_bytes: 512 * 1024 * 1024,
        }
    }
}

/// Upstream Vimeo API settings.
///
/// Passed by value into the client constructor; the client never reads
/// process state on its own.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VimeoConfig {
    pub base_url: String,
    pub access_token: String,
    pub timeout_seconds: u64,
}

impl VimeoConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for VimeoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.vimeo.com".to_string(),
            access_token: String::new(),
            timeout_seconds: 30,
        }
    }
}

impl fmt::Debug for VimeoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VimeoConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development
    #[default]
    Pretty,
    /// Structured output for production
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
        }
    }
}

impl Config {
    /// Load configuration from multiple sources with priority:
    /// 1. Environment variables (highest priority)
    /// 2. Config file (if provided)
    /// 3. Defaults (lowest priority)
    ///
    /// Environment keys nest with a double underscore, e.g.
    /// `VIDGATE_VIMEO__ACCESS_TOKEN` or `VIDGATE_SERVER__HTTP_PORT`.
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_file {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path));
            } else {
                return Err(ConfigError::NotFound(path.to_string()));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("VIDGATE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load from environment variables only (for Docker/K8s)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load from file path
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::load(Some(path))
    }

    /// Check the whole configuration, collecting every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.vimeo.access_token.trim().is_empty() {
            errors.push("vimeo.access_token must be set".to_string());
        }

        match url::Url::parse(&self.vimeo.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(format!(
                "vimeo.base_url must use http or https (got {})",
                url.scheme()
            )),
            Err(e) => errors.push(format!("vimeo.base_url is not a valid URL: {e}")),
        }

        if self.vimeo.timeout_seconds == 0 {
            errors.push("vimeo.timeout_seconds must be greater than 0".to_string());
        }

        if self.server.http_port == 0 {
            errors.push("server.http_port must be greater than 0".to_string());
        }

        if !self.server.route_prefix.is_empty() && !self.server.route_prefix.starts_with('/') {
            errors.push(format!(
                "server.route_prefix must start with '/' (got {})",
                self.server.route_prefix
            ));
        }

        if self.server.max_upload_bytes == 0 {
            errors.push("server.max_upload_bytes must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Get HTTP address
    #[must_use]
    pub fn http_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.http_port)
    }
}
