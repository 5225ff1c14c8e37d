// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation, span creation, and CORS configuration

/// CORS configuration
pub mod cors;
/// Request IDs and request spans
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{
    create_request_span, generate_request_id, make_request_span, request_id_header,
    PlannerRequestId, REQUEST_ID_HEADER,
};
