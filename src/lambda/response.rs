//! Outbound invocation responses.

use axum::http::{header, HeaderValue};
use lambda_http::{Body, Response as LambdaResponse};

use crate::http::response::Response;

/// Translate a router response into a `lambda_http` response.
///
/// `lambda_http` renders it into the envelope the invoking service expects.
pub fn unadapt(response: Response) -> LambdaResponse<Body> {
    let status = response.status();
    let mut lambda_response = LambdaResponse::new(Body::from(response.body_string()));
    *lambda_response.status_mut() = status;
    lambda_response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    lambda_response
}
