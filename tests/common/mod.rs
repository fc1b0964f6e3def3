//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use item_service::config::{AppProfile, ServiceConfig};
use item_service::handlers::{build_router, RouteSettings};
use item_service::lambda::RuntimeInfo;
use item_service::{HttpServer, Shutdown};

/// Fixed runtime values so `/info` is deterministic.
#[allow(dead_code)]
pub fn test_runtime_info() -> RuntimeInfo {
    RuntimeInfo {
        runtime: "AWS Lambda".into(),
        framework: "FastAPI".into(),
        region: "eu-central-1".into(),
        function_name: "items-test".into(),
    }
}

/// Build a server for `profile` without binding it.
#[allow(dead_code)]
pub fn build_server(profile: AppProfile) -> HttpServer {
    let mut config = ServiceConfig::default();
    config.app.profile = profile;
    let settings = RouteSettings::from_config(&config.app);
    let routes = build_router(&settings, test_runtime_info()).unwrap();
    HttpServer::new(config, Arc::new(routes))
}

/// Start a server on an ephemeral port. Trigger the returned handle to stop it.
#[allow(dead_code)]
pub async fn start_server(profile: AppProfile) -> (SocketAddr, Shutdown) {
    let server = build_server(profile);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}
