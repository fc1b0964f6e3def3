//! Inbound invocation events.
//!
//! # Responsibilities
//! - Turn a `lambda_http::Request` (API Gateway v1/v2 or ALB) into the
//!   router's `Request`
//!
//! # Design Decisions
//! - Event formats and their deserialization belong to `lambda_http`
//! - The path is the event's raw path, without the stage prefix
//!   `lambda_http` adds to the URI, and is percent-decoded like the
//!   HTTP listener's
//! - Multi-valued query keys collapse to their last value, the same
//!   last-wins rule as the HTTP listener
//! - ALB query parameters arrive URL-encoded; `lambda_http` decodes them
//!   while building the request, so they are not decoded twice here

use lambda_http::RequestExt;

use crate::http::request::{normalize_path, QueryParams, Request};

/// Translate an invocation request into a router request.
pub fn adapt(event: &lambda_http::Request) -> Request {
    let raw_path = match event.raw_http_path() {
        "" => event.uri().path(),
        path => path,
    };

    let mut query = QueryParams::new();
    for (key, value) in event.query_string_parameters().iter() {
        query.insert(key.to_string(), value.to_string());
    }

    Request::new(event.method().clone(), normalize_path(raw_path), query)
}

/// Parse a raw JSON event of any supported format.
pub fn parse_event(raw: &str) -> Result<lambda_http::Request, serde_json::Error> {
    lambda_http::request::from_str(raw)
}
