// ABOUTME: Main library entry point for the Todo Task Manager developer tools
// ABOUTME: Provides the test-data loader and the local API documentation server
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Todo Devtools
//!
//! Two utilities that sit next to a separately hosted todo-task-manager API:
//!
//! - **`load-test-data`**: registers the fixture users, logs in as one of them and
//!   creates the fixture tasks through the public HTTP API.
//! - **`serve-docs`**: serves the Swagger documentation directory over local HTTP
//!   with permissive CORS headers and opens it in the browser.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use todo_devtools::config::environment::LoaderConfig;
//! use todo_devtools::loader::{load_and_seed, StdoutReporter};
//!
//! #[tokio::main]
//! async fn main() -> todo_devtools::errors::AppResult<()> {
//!     let config = LoaderConfig::new("http://localhost:3001")?;
//!     let report = load_and_seed(&config, &mut StdoutReporter).await?;
//!     println!("created {} tasks", report.tasks_created);
//!     Ok(())
//! }
//! ```

/// Command-line argument definitions for both binaries
pub mod cli;

/// Environment and command-line configuration
pub mod config;

/// Static documentation server with CORS headers
pub mod docs_server;

/// Test-data loader: fixture parsing, API client, and seeding flow
pub mod loader;

/// Structured logging setup
pub mod logging;

/// HTTP middleware shared by the docs server
pub mod middleware;

/// Re-export of the core error types
pub use todo_devtools_core::errors;

/// Re-export of the core constants
pub use todo_devtools_core::constants;

/// Re-export of the core models
pub use todo_devtools_core::models;
