// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation, per-request spans and the CORS layer

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and correlation
pub use self::tracing::{
    propagate_request_id_layer, set_request_id_layer, trace_layer, RequestSpan,
    REQUEST_ID_HEADER,
};
