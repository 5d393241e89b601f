mod server;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use vidgate_api::create_router;
use vidgate_core::{bootstrap::load_config, logging};
use vidgate_media_providers::VimeoClient;

#[derive(Parser, Debug)]
#[command(name = "vidgate")]
#[command(about = "VidGate video gateway for the Vimeo API", long_about = None)]
struct Args {
    /// Path to a YAML/TOML config file
    #[arg(long, short = 'c', env = "VIDGATE_CONFIG_PATH")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load and validate configuration
    let config = load_config(args.config.as_deref())?;

    // 2. Initialize logging
    logging::init_logging(&config.logging)?;
    info!("VidGate starting...");
    info!(
        base_url = %config.vimeo.base_url,
        timeout_seconds = config.vimeo.timeout_seconds,
        "Vimeo upstream configured"
    );

    // 3. Build the provider client
    let client = VimeoClient::new(&config.vimeo)?;

    // 4. Build the router and serve
    let app = create_router(Arc::new(client), &config.server);
    info!("Video routes mounted at {}", config.server.route_prefix);

    server::serve(&config.http_address(), app).await
}
