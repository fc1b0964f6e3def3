//! Item service (v1)
//!
//! A small JSON service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http::server ──▶ routing::Router          │
//!                           │   (request ID,      (ordered patterns,       │
//!                           │    trace, timeout)   typed placeholders)     │
//!                           │                          │                   │
//!                           │                          ▼                   │
//!     Client Response       │                      handlers                │
//!     ◀─────────────────────┼── http::response ◀── (pure functions)        │
//!                           │                                              │
//!     Invocation event ─────┼─▶ lambda::adapt ──▶ Router ──▶ lambda::unadapt
//!                           │                                              │
//!                           │   config · observability · lifecycle         │
//!                           └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use item_service::config::{load_config, ServiceConfig};
use item_service::handlers::{build_router, RouteSettings};
use item_service::http::HttpServer;
use item_service::lambda::RuntimeInfo;
use item_service::lifecycle::{signals, Shutdown};
use item_service::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "item-service")]
#[command(about = "Item lookup JSON service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability).map_err(|e| e.to_string())?;

    tracing::info!("item-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        profile = ?config.app.profile,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let info = RuntimeInfo::from_env(
        config.app.runtime_label.clone(),
        config.app.framework_label.clone(),
    );
    let settings = RouteSettings::from_config(&config.app);
    let routes = Arc::new(build_router(&settings, info)?);
    for route in routes.routes() {
        tracing::info!(
            name = route.name(),
            method = %route.method(),
            pattern = %route.pattern(),
            "Route registered"
        );
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    let server = HttpServer::new(config, routes);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
