//! Configuration loading

use anyhow::Result;
use tracing::info;

use crate::Config;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "VIDGATE_CONFIG_PATH";

/// Load configuration from config file or environment variables
///
/// Config file search order:
/// 1. `explicit_path` (e.g. from `--config`); failing to load it is fatal
/// 2. `VIDGATE_CONFIG_PATH` environment variable
/// 3. ./config.yaml (current working directory)
/// 4. /config/config.yaml (Kubernetes mount path)
/// 5. Fall back to environment variables only
///
/// Validation runs before this returns. Logging is not initialized yet at
/// this point, so progress is reported on stderr.
pub fn load_config(explicit_path: Option<&str>) -> Result<Config> {
    let config = if let Some(path) = explicit_path {
        eprintln!("Loading config from {path}");
        Config::from_file(path).map_err(|e| anyhow::anyhow!("Failed to load {path}: {e}"))?
    } else if let Some(path) = discover_config_path() {
        eprintln!("Loading config from {path}");
        match Config::from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Failed to load {path}: {e}");
                eprintln!("Falling back to environment variables");
                Config::from_env()?
            }
        }
    } else {
        eprintln!("No config file found, using environment variables");
        Config::from_env()?
    };

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Config validation error: {error}");
        }
        return Err(anyhow::anyhow!(
            "Configuration validation failed with {} error(s): {}",
            errors.len(),
            errors.join("; ")
        ));
    }

    info!("Configuration loaded and validated successfully");
    Ok(config)
}

/// Determine config file path: env var > CWD > /config/ mount
fn discover_config_path() -> Option<String> {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| std::path::Path::new(p).exists())
        .or_else(|| {
            ["config.yaml", "/config/config.yaml"]
                .into_iter()
                .find(|p| std::path::Path::new(p).exists())
                .map(str::to_string)
        })
}
