//! Server lifecycle management
//!
//! Binds the HTTP listener, serves the gateway router and drains in-flight
//! requests when a shutdown signal arrives.

use std::net::SocketAddr;

use anyhow::Context;
use axum::{extract::Request, ServiceExt};
use tracing::{error, info};
use vidgate_api::GatewayService;

/// Serve `app` on `http_address` until SIGTERM or Ctrl+C
pub async fn serve(http_address: &str, app: GatewayService) -> anyhow::Result<()> {
    let http_addr: SocketAddr = http_address
        .parse()
        .with_context(|| format!("Invalid HTTP address '{http_address}'"))?;

    let listener = tokio::net::TcpListener::bind(http_addr)
        .await
        .with_context(|| format!("Failed to bind HTTP address {http_addr}"))?;

    info!("HTTP server listening on {}", http_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server shut down gracefully");
    Ok(())
}

/// Wait for a shutdown signal (SIGTERM or SIGINT/Ctrl+C)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("Received Ctrl+C"); }
        () = terminate => { info!("Received SIGTERM"); }
    }
}
