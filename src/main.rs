//! Secret Relay Service
//!
//! A small form-submission service built with Tokio and Axum.
//!
//! # Request Flow
//!
//! ```text
//!     Client form POST          ┌──────────────────────────────────────────┐
//!     ─────────────────────────▶│  http server                             │
//!                               │    → middleware (request ID, timeout,    │
//!                               │      body limit, trace)                  │
//!                               │    → submit handler                      │
//!                               │        1. artificial delay elapses       │
//!                               │        2. read `secret` field            │
//!                               │        3. base64-encode it               │
//!     JSON response             │        4. { success, secretMessage }     │
//!     ◀─────────────────────────│                                          │
//!                               └──────────────────────────────────────────┘
//! ```
//!
//! Cross-cutting concerns: config (TOML file + CLI overrides), observability
//! (tracing, optional Prometheus exposition), lifecycle (graceful shutdown).

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use secret_relay::config::{loader, ServiceConfig};
use secret_relay::http::HttpServer;
use secret_relay::lifecycle::Shutdown;
use secret_relay::observability;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "secret-relay", version, about = "Form handler that returns the base64 of a submitted secret")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init("secret_relay=debug,tower_http=debug");

    let args = Args::parse();

    // Load configuration; defaults allow running without a config file
    let mut config = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(listen) = args.listen {
        config.listener.bind_address = listen;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        delay_ms = config.handler.delay_ms,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exposition
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
