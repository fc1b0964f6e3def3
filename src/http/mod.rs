//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware)
//!     → request.rs (request ID, query parsing)
//!     → routing::Router (match, parse, handler)
//!     → response.rs (status + JSON body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{QueryParams, Request, X_REQUEST_ID};
pub use response::{JsonBody, Response};
pub use server::HttpServer;
