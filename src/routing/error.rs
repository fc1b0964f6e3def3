//! Routing errors.
//!
//! `RouteError` is raised while the route table is being declared and is
//! fatal at startup. `DispatchError` is the per-request outcome and always
//! maps to a client response.

use axum::http::{Method, StatusCode};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::http::response::Response;
use crate::routing::pattern::ParamKind;

/// A route pattern could not be compiled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),

    #[error("pattern `{pattern}` uses unknown placeholder type `{kind}`")]
    UnknownParamKind { pattern: String, kind: String },

    #[error("pattern `{0}` has a placeholder with no name")]
    EmptyParamName(String),

    #[error("pattern `{pattern}` declares placeholder `{name}` more than once")]
    DuplicateParam { pattern: String, name: String },

    #[error("pattern `{pattern}` has malformed segment `{segment}`")]
    MalformedSegment { pattern: String, segment: String },
}

/// A request could not be handed to a handler.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// A typed placeholder did not parse.
    #[error("path parameter `{param}` expects {kind}, got `{input}`")]
    Validation {
        param: String,
        kind: ParamKind,
        input: String,
    },

    /// No route matched method and path.
    #[error("no route for {method} {path}")]
    NotFound { method: Method, path: String },
}

impl DispatchError {
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DispatchError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Render the client-facing body.
    pub fn into_response(self) -> Response {
        let status = self.status();
        let mut body = Map::new();
        match self {
            DispatchError::Validation { param, kind, input } => {
                let (error_type, detail) = match kind {
                    ParamKind::Int => (
                        "int_parsing",
                        "Input should be a valid integer, unable to parse string as an integer",
                    ),
                    ParamKind::Str => ("string_type", "Input should be a valid string"),
                };
                body.insert("detail".into(), detail.into());
                body.insert("type".into(), error_type.into());
                body.insert("loc".into(), "path".into());
                body.insert("param".into(), param.into());
                body.insert("input".into(), input.into());
            }
            DispatchError::NotFound { .. } => {
                body.insert("detail".into(), Value::from("Not Found"));
            }
        }
        Response::new(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body_names_param_and_input() {
        let err = DispatchError::Validation {
            param: "item_id".into(),
            kind: ParamKind::Int,
            input: "abc".into(),
        };
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.body()["param"], "item_id");
        assert_eq!(response.body()["input"], "abc");
        assert_eq!(response.body()["type"], "int_parsing");
    }

    #[test]
    fn test_not_found_body() {
        let err = DispatchError::NotFound {
            method: Method::GET,
            path: "/nope".into(),
        };
        assert_eq!(err.to_string(), "no route for GET /nope");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body()["detail"], "Not Found");
    }
}
