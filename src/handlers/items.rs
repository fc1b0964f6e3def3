//! `GET /items/{item_id:int}` lookup.

use serde_json::Value;

use crate::http::request::QueryParams;
use crate::http::response::{JsonBody, Response};
use crate::routing::pattern::ParamKind;
use crate::routing::{DispatchError, PathParams};

/// Name of the item placeholder in the route pattern.
pub const ITEM_PARAM: &str = "item_id";

/// Echo the item id and the optional `q` query value.
///
/// `source` is an additive deployment tag (e.g. `"lambda"`).
pub fn read_item(item_id: i128, q: Option<&str>, source: Option<&str>) -> Response {
    let mut body = JsonBody::new();
    body.insert("item_id".into(), int_value(item_id));
    body.insert("q".into(), q.map_or(Value::Null, Value::from));
    if let Some(source) = source {
        body.insert("source".into(), Value::from(source));
    }
    Response::ok(body)
}

/// Route handler body: pull `item_id` out of the parsed parameters.
///
/// The route's pattern always yields an int; a table wired to a pattern
/// without one is rejected with a 422 and logged.
pub fn item_response(params: &PathParams, query: &QueryParams, source: Option<&str>) -> Response {
    match params.int(ITEM_PARAM) {
        Some(item_id) => read_item(item_id, query.get("q").map(String::as_str), source),
        None => {
            tracing::error!(
                param = ITEM_PARAM,
                "Item route dispatched without an integer parameter"
            );
            DispatchError::Validation {
                param: ITEM_PARAM.to_string(),
                kind: ParamKind::Int,
                input: params.str(ITEM_PARAM).unwrap_or_default().to_string(),
            }
            .into_response()
        }
    }
}

/// JSON number for an accepted `int` placeholder value.
fn int_value(n: i128) -> Value {
    if let Ok(n) = i64::try_from(n) {
        Value::from(n)
    } else if let Ok(n) = u64::try_from(n) {
        Value::from(n)
    } else {
        Value::from(n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_missing_q_is_null() {
        let response = read_item(7, None, None);
        assert_eq!(Value::Object(response.body().clone()), json!({"item_id": 7, "q": null}));
    }

    #[test]
    fn test_q_and_source() {
        let response = read_item(-1, Some("x"), Some("lambda"));
        assert_eq!(
            Value::Object(response.body().clone()),
            json!({"item_id": -1, "q": "x", "source": "lambda"})
        );
    }

    #[test]
    fn test_u64_item_id_is_a_json_number() {
        let response = read_item(u64::MAX as i128, None, None);
        assert_eq!(response.body()["item_id"], json!(u64::MAX));
        assert_eq!(response.body_string(), r#"{"item_id":18446744073709551615,"q":null}"#);
    }

    #[test]
    fn test_missing_param_is_rejected() {
        let response = item_response(&PathParams::default(), &QueryParams::new(), None);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.body()["param"], ITEM_PARAM);
        assert_eq!(response.body()["input"], "");
    }
}
