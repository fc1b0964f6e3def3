//! `GET /info` runtime description.

use serde_json::Value;

use crate::http::response::{JsonBody, Response};
use crate::lambda::RuntimeInfo;

/// Report the already-resolved runtime values.
pub fn get_info(info: &RuntimeInfo) -> Response {
    let mut body = JsonBody::new();
    body.insert("runtime".into(), Value::from(info.runtime.as_str()));
    body.insert("framework".into(), Value::from(info.framework.as_str()));
    body.insert("region".into(), Value::from(info.region.as_str()));
    body.insert("function_name".into(), Value::from(info.function_name.as_str()));
    Response::ok(body)
}
