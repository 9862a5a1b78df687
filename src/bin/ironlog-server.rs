// ABOUTME: HTTP server binary for the ironlog workout tracker
// ABOUTME: Loads configuration, initializes logging and serves the recommendation and analytics API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ironlog Server Binary
//!
//! Starts the HTTP API serving AI coaching recommendations and the
//! deterministic training analytics.

use std::future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use ironlog_server::{
    config::ServerConfig, logging, resources::ServerResources, routes::build_router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "ironlog-server")]
#[command(about = "Ironlog - training analytics and AI coaching API")]
struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<IpAddr>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("{}", config.summary());

    let addr = SocketAddr::new(config.host, config.http_port);
    let resources = Arc::new(ServerResources::new(config));
    let app = build_router(resources);

    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on http://{addr}");
    display_available_endpoints();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn display_available_endpoints() {
    info!("=== Available API Endpoints ===");
    info!("  GET  /health");
    info!("  GET  /ready");
    info!("  POST /api/generate-recommendations");
    info!("  POST /api/analytics/rule-recommendations");
    info!("  POST /api/analytics/recovery");
    info!("  POST /api/analytics/personal-records");
    info!("  POST /api/analytics/weekly-summary");
    info!("  POST /api/analytics/strength-profile");
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        // Keep serving without graceful shutdown
        future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_bind_address() {
        let args = Args::try_parse_from([
            "ironlog-server",
            "--host",
            "127.0.0.1",
            "--http-port",
            "9090",
        ])
        .unwrap();
        assert_eq!(args.host, Some(IpAddr::from([127, 0, 0, 1])));
        assert_eq!(args.http_port, Some(9090));

        let defaults = Args::try_parse_from(["ironlog-server"]).unwrap();
        assert!(defaults.host.is_none());
        assert!(defaults.http_port.is_none());
    }
}
