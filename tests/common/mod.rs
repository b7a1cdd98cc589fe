//! Shared utilities for integration testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use secret_relay::config::ServiceConfig;
use secret_relay::http::HttpServer;
use secret_relay::lifecycle::Shutdown;

/// Build a test configuration with a short handler delay.
pub fn test_config(delay_ms: u64) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.handler.delay_ms = delay_ms;
    config.observability.metrics_enabled = false;
    config
}

/// Spawn the service on an ephemeral loopback port.
///
/// Returns the bound address and a shutdown handle; triggering the handle
/// stops the spawned server.
pub async fn spawn_service(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}
