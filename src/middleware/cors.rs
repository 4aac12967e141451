// ABOUTME: CORS header injection for the documentation server
// ABOUTME: Adds fixed allow-origin, allow-methods, and allow-headers to every response
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::constants::cors::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use http::{HeaderValue, Method, StatusCode};
use tower_http::set_header::SetResponseHeaderLayer;

/// Wrap `router` so every response, including errors and preflights, carries
/// the three CORS headers
///
/// `tower_http::cors::CorsLayer` only emits the method and header lists on
/// preflight responses, so the headers are set unconditionally instead.
///
/// Layers run outermost-last: the header layers wrap the preflight responder.
#[must_use]
pub fn with_cors_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(middleware::from_fn(answer_preflight))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
}

/// Answer `OPTIONS` with `204 No Content` and pass everything else through
pub async fn answer_preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    next.run(request).await
}
