//! Item service library.
//!
//! A fixed, ordered route table mapping declared path patterns to pure
//! response-building handlers, served over HTTP (axum) or behind a
//! serverless invocation adapter.

pub mod config;
pub mod handlers;
pub mod http;
pub mod lambda;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::ServiceConfig;
pub use handlers::{build_router, RouteSettings};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::Router;
