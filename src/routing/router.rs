//! Route table and dispatch.
//!
//! # Responsibilities
//! - Store declared routes in declaration order
//! - Find the first route whose method and pattern match
//! - Parse placeholders before the handler runs
//! - Return the handler's response or an explicit error
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in declaration order; first match wins
//! - A typed placeholder that fails to parse stops the scan with a 422;
//!   later routes are not consulted
//! - Explicit NotFound rather than silent default

use std::fmt;
use std::sync::Arc;

use axum::http::Method;

use crate::http::request::{QueryParams, Request};
use crate::http::response::Response;
use crate::routing::error::{DispatchError, RouteError};
use crate::routing::pattern::{ParamValue, RoutePattern};

/// Parsed path parameters, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    values: Vec<(String, ParamValue)>,
}

impl PathParams {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn int(&self, name: &str) -> Option<i128> {
        match self.get(name) {
            Some(ParamValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ParamValue::Str(s)) => Some(s),
            _ => None,
        }
    }
}

/// Builds a response from parsed parameters.
///
/// Implementations must be pure: the same inputs yield the same response.
pub trait Handler: Send + Sync {
    fn call(&self, params: &PathParams, query: &QueryParams) -> Response;
}

impl<F> Handler for F
where
    F: Fn(&PathParams, &QueryParams) -> Response + Send + Sync,
{
    fn call(&self, params: &PathParams, query: &QueryParams) -> Response {
        self(params, query)
    }
}

/// A declared route.
#[derive(Clone)]
pub struct Route {
    name: String,
    method: Method,
    pattern: RoutePattern,
    handler: Arc<dyn Handler>,
}

impl Route {
    pub fn new(
        name: impl Into<String>,
        method: Method,
        pattern: &str,
        handler: impl Handler + 'static,
    ) -> Result<Self, RouteError> {
        Ok(Self {
            name: name.into(),
            method,
            pattern: RoutePattern::parse(pattern)?,
            handler: Arc::new(handler),
        })
    }

    /// Shorthand for a GET route.
    pub fn get(
        name: impl Into<String>,
        pattern: &str,
        handler: impl Handler + 'static,
    ) -> Result<Self, RouteError> {
        Self::new(name, Method::GET, pattern, handler)
    }

    /// Route identifier for logs and metrics.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// A successful dispatch: which route ran and what it returned.
#[derive(Debug)]
pub struct Matched<'r> {
    pub route: &'r Route,
    pub response: Response,
}

/// Immutable, ordered route table.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find and run the handler for a request.
    pub fn route(
        &self,
        method: &Method,
        path: &str,
        query: &QueryParams,
    ) -> Result<Matched<'_>, DispatchError> {
        for route in &self.routes {
            if route.method != *method {
                continue;
            }
            let Some(path_match) = route.pattern.match_path(path) else {
                continue;
            };

            let mut values = Vec::with_capacity(path_match.captures.len());
            for (name, kind, raw) in path_match.captures {
                let value = kind.parse(raw).ok_or_else(|| DispatchError::Validation {
                    param: name.to_string(),
                    kind,
                    input: raw.to_string(),
                })?;
                values.push((name.to_string(), value));
            }

            let params = PathParams { values };
            let response = route.handler.call(&params, query);
            return Ok(Matched { route, response });
        }

        Err(DispatchError::NotFound {
            method: method.clone(),
            path: path.to_string(),
        })
    }

    /// Dispatch and fold errors into their client responses.
    pub fn dispatch(&self, method: &Method, path: &str, query: &QueryParams) -> Response {
        match self.route(method, path, query) {
            Ok(matched) => matched.response,
            Err(e) => e.into_response(),
        }
    }

    /// Dispatch a [`Request`].
    pub fn handle(&self, request: &Request) -> Response {
        self.dispatch(&request.method, &request.path, &request.query)
    }
}
