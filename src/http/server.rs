//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router that hands every request to the route table
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener
//! - Record per-request logs and metrics
//! - Drain in-flight requests on shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::IntoResponse,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::request::{
    normalize_path, parse_query, propagate_request_id_layer, request_id_of,
    set_request_id_layer,
};
use crate::lifecycle::shutdown;
use crate::observability::metrics::{self, NO_ROUTE};
use crate::routing::Router as RouteTable;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server for the item service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `routes`.
    pub fn new(config: ServiceConfig, routes: Arc<RouteTable>) -> Self {
        let router = Self::build_router(&config, AppState { routes });
        Self { router, config }
    }

    /// Build the axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(propagate_request_id_layer())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The assembled axum router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Translate the HTTP request into a route table call.
async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let start_time = Instant::now();
    let request_id = request_id_of(&headers);
    let path = normalize_path(uri.path());
    let path = path.as_str();
    let query = parse_query(uri.query());

    let (route_name, response) = match state.routes.route(&method, path, &query) {
        Ok(matched) => (matched.route.name(), matched.response),
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %e,
                "Request rejected"
            );
            (NO_ROUTE, e.into_response())
        }
    };

    let status = response.status().as_u16();
    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        route = route_name,
        status,
        "Request dispatched"
    );
    metrics::record_request(method.as_str(), status, route_name, start_time);

    response
}
