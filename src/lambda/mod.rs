//! Serverless invocation boundary.
//!
//! # Data Flow
//! ```text
//! Invocation event
//!     → lambda_http (deserialize API Gateway v1/v2 or ALB → lambda_http::Request)
//!     → event.rs (adapt → Request)
//!     → routing::Router::handle
//!     → response.rs (unadapt → lambda_http::Response<Body>)
//!     → lambda_http (serialize the envelope)
//!
//! Startup:
//!     environment.rs (AWS_REGION, AWS_LAMBDA_FUNCTION_NAME)
//!     → RuntimeInfo → handlers::build_router
//! ```
//!
//! # Design Decisions
//! - Lives outside the router; the router never sees an event
//! - Malformed events are adapter errors, not HTTP responses

pub mod environment;
pub mod event;
pub mod response;

pub use environment::RuntimeInfo;
pub use event::{adapt, parse_event};
pub use response::unadapt;

use lambda_http::Body;
use thiserror::Error;

use crate::routing::Router;

/// An invocation event could not be translated.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("malformed invocation event: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Run an invocation request through the router.
pub fn handle_event(router: &Router, event: &lambda_http::Request) -> lambda_http::Response<Body> {
    let request = adapt(event);
    let response = router.handle(&request);
    tracing::info!(
        method = %request.method,
        path = %request.path,
        status = response.status().as_u16(),
        "Invocation handled"
    );
    unadapt(response)
}

/// Parse a raw JSON event and run it through the router.
pub fn invoke(router: &Router, raw_event: &str) -> Result<lambda_http::Response<Body>, AdapterError> {
    let event = parse_event(raw_event)?;
    Ok(handle_event(router, &event))
}
