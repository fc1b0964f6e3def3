//! `GET /health` liveness check.

use serde_json::Value;

use crate::http::response::{JsonBody, Response};

/// Always healthy: the service has no dependencies to check.
pub fn health_check(service: Option<&str>) -> Response {
    let mut body = JsonBody::new();
    body.insert("status".into(), Value::from("healthy"));
    if let Some(service) = service {
        body.insert("service".into(), Value::from(service));
    }
    Response::ok(body)
}
