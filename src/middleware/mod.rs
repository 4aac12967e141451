// ABOUTME: HTTP middleware for the documentation server
// ABOUTME: CORS header injection and preflight handling

/// CORS response headers and preflight handling
pub mod cors;

pub use cors::{answer_preflight, with_cors_headers};
