// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates request IDs and creates an http_request span for every request

use axum::body::Body;
use http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the request ID in and out
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Header name for the request-id layers
#[must_use]
pub const fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Fresh request ID in the `req_<uuid>` form
#[must_use]
pub fn generate_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

/// Request ID generator for `SetRequestIdLayer`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlannerRequestId;

impl MakeRequestId for PlannerRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&generate_request_id())
            .ok()
            .map(RequestId::new)
    }
}

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = tracing::field::Empty,
        status_code = tracing::field::Empty,
    )
}

/// `TraceLayer::make_span_with` hook
///
/// Runs after `SetRequestIdLayer`, so the header is normally present; a
/// client-supplied ID is kept as is.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let span = create_request_span(request.method().as_str(), request.uri().path());
    if let Some(request_id) = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        span.record("request_id", request_id);
    }
    span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let first = generate_request_id();
        let second = generate_request_id();
        assert!(first.starts_with("req_"));
        assert_eq!(first.len(), 4 + 32);
        assert_ne!(first, second);
    }

    #[test]
    fn test_make_request_id_produces_header_value() {
        let request = Request::builder().uri("/health").body(()).unwrap();
        let id = PlannerRequestId.make_request_id(&request).unwrap();
        assert!(id.header_value().to_str().unwrap().starts_with("req_"));
    }
}
