//! Response model shared by handlers and every boundary.
//!
//! # Responsibilities
//! - Carry a status code and a JSON object body
//! - Serialize deterministically (same response, same bytes)
//! - Convert into an axum response for the HTTP listener
//!
//! # Design Decisions
//! - Body is always a JSON object, never a bare scalar or array
//! - Immutable once a handler returns it

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use serde_json::{Map, Value};

/// A JSON object body.
pub type JsonBody = Map<String, Value>;

/// Status code plus JSON object body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: StatusCode,
    body: JsonBody,
}

impl Response {
    pub fn new(status: StatusCode, body: JsonBody) -> Self {
        Self { status, body }
    }

    /// 200 OK with the given body.
    pub fn ok(body: JsonBody) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &JsonBody {
        &self.body
    }

    pub fn into_parts(self) -> (StatusCode, JsonBody) {
        (self.status, self.body)
    }

    /// Serialize the body to its wire form.
    pub fn body_string(&self) -> String {
        // A map of serde_json values always serializes; the fallback is unreachable.
        serde_json::to_string(&self.body).unwrap_or_else(|_| "{}".to_string())
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        let body = self.body_string();
        (
            self.status,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_string_is_stable() {
        let mut body = JsonBody::new();
        body.insert("item_id".into(), 42.into());
        body.insert("q".into(), Value::Null);
        let response = Response::ok(body);

        assert_eq!(response.body_string(), r#"{"item_id":42,"q":null}"#);
        assert_eq!(response.body_string(), response.clone().body_string());
    }

    #[test]
    fn test_into_axum_response_sets_json_content_type() {
        let response = Response::new(StatusCode::NOT_FOUND, JsonBody::new()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
