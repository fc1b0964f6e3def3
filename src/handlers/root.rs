//! `GET /` greeting.

use serde_json::Value;

use crate::http::response::{JsonBody, Response};

/// Greeting body. `with_status` adds `"status": "success"`.
pub fn read_root(greeting: &str, with_status: bool) -> Response {
    let mut body = JsonBody::new();
    body.insert("message".into(), Value::from(greeting));
    if with_status {
        body.insert("status".into(), Value::from("success"));
    }
    Response::ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_greeting() {
        let response = read_root("hi", false);
        assert_eq!(response.body().len(), 1);
        assert_eq!(response.body()["message"], "hi");
    }

    #[test]
    fn test_greeting_with_status() {
        let response = read_root("hi", true);
        assert_eq!(response.body()["status"], "success");
    }
}
