//! Request model and request identification.
//!
//! # Responsibilities
//! - Hold the transport-neutral `(method, path, query)` triple
//! - Parse raw query strings into a unique-key map
//! - Percent-decode the request path before routing
//! - Generate a unique request ID (UUID v4) for every inbound call
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Duplicate query keys collapse to the last value
//! - A client-supplied `x-request-id` is kept, not overwritten

use std::collections::BTreeMap;

use axum::http::{HeaderName, HeaderValue, Method};
use percent_encoding::percent_decode_str;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Query parameters with unique keys.
pub type QueryParams = BTreeMap<String, String>;

/// An inbound call as seen by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>, query: QueryParams) -> Self {
        Self {
            method,
            path: path.into(),
            query,
        }
    }

    /// Build from a path that may carry a `?query` suffix.
    pub fn from_target(method: Method, target: &str) -> Self {
        let (path, raw_query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };
        Self::new(method, normalize_path(path), parse_query(raw_query))
    }
}

/// Percent-decode a raw URL path. Invalid UTF-8 is replaced, not rejected.
///
/// `%2F` decodes to `/` and therefore splits the segment, as the path is
/// decoded as a whole before matching.
pub fn normalize_path(raw: &str) -> String {
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    if decoded.starts_with('/') {
        decoded.into_owned()
    } else {
        format!("/{decoded}")
    }
}

/// Decode a raw `a=1&b=2` query string. Later duplicates win.
pub fn parse_query(raw: Option<&str>) -> QueryParams {
    raw.map(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect()
    })
    .unwrap_or_default()
}

/// Produces UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Layer that assigns an ID to requests lacking one.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuidV4> {
    SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4)
}

/// Layer that copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_REQUEST_ID)
}

/// Read the request ID assigned by [`set_request_id_layer`].
pub fn request_id_of(headers: &axum::http::HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
