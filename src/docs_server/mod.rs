// ABOUTME: Local static file server for the Swagger documentation
// ABOUTME: Router construction; binding and lifecycle live in the server module
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Documentation Server
//!
//! Serves the working directory (normally `api-docs.html` plus `swagger.yaml`)
//! over HTTP. Every response carries permissive CORS headers so the Swagger UI
//! page can be opened from other origins during development.

/// Default browser launch
pub mod browser;
/// Directory listing fallback
pub mod listing;
/// Bind, banner, and graceful shutdown
pub mod server;

pub use server::{bind, run, run_with_shutdown, serve, shutdown_signal};

use crate::config::environment::DocsServerConfig;
use crate::middleware::with_cors_headers;
use axum::handler::Handler;
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the router serving `config.directory`
///
/// Directories resolve to their `index.html`; directories without one get a
/// generated listing. Unknown paths answer 404.
#[must_use]
pub fn build_router(config: &DocsServerConfig) -> Router {
    let root = Arc::new(config.directory.clone());
    let listing = listing::directory_listing.with_state(root);

    let files = ServeDir::new(&config.directory)
        .append_index_html_on_directories(true)
        .fallback(listing);

    let router = Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http());

    with_cors_headers(router)
}
