// ABOUTME: Command-line argument definitions for load-test-data and serve-docs
// ABOUTME: Flags fall back to environment variables, then to built-in defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Argument parsing lives in the library so the flag surface can be tested
//! without spawning the binaries.

use crate::config::environment::{DocsServerConfig, LoaderConfig};
use crate::constants::{docs, env_vars, loader};
use crate::errors::{AppError, AppResult, ErrorCode};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Load test data into the Todo Task Manager
#[derive(Debug, Parser)]
#[command(
    name = "load-test-data",
    version,
    about = "Load test data into Todo Task Manager",
    long_about = "Registers every fixture user, logs in as one of them, and creates the fixture tasks through the API."
)]
pub struct LoadTestDataArgs {
    /// API base URL
    #[arg(long, env = env_vars::API_URL, default_value = loader::DEFAULT_API_URL)]
    pub api_url: String,

    /// Index of the user to create tasks for
    #[arg(long, env = env_vars::USER_INDEX, default_value_t = 0)]
    pub user_index: usize,

    /// Fixture file with users and tasks
    #[arg(long, env = env_vars::FIXTURE_PATH, default_value = loader::DEFAULT_FIXTURE_PATH)]
    pub fixture: PathBuf,

    /// Pause after each registration request, in milliseconds
    #[arg(long, env = env_vars::REGISTER_DELAY_MS, default_value_t = loader::DEFAULT_REGISTER_DELAY_MS)]
    pub register_delay_ms: u64,

    /// Pause after each task request, in milliseconds
    #[arg(long, env = env_vars::TASK_DELAY_MS, default_value_t = loader::DEFAULT_TASK_DELAY_MS)]
    pub task_delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, env = env_vars::REQUEST_TIMEOUT_SECS, default_value_t = loader::DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl LoadTestDataArgs {
    /// Validate the arguments into a loader config
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a malformed API URL or a zero timeout
    pub fn into_config(self) -> AppResult<LoaderConfig> {
        let config = LoaderConfig {
            fixture_path: self.fixture,
            user_index: self.user_index,
            register_delay: Duration::from_millis(self.register_delay_ms),
            task_delay: Duration::from_millis(self.task_delay_ms),
            ..LoaderConfig::new(&self.api_url)?
        };
        config.with_request_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Serve the API documentation locally
#[derive(Debug, Parser)]
#[command(
    name = "serve-docs",
    version,
    about = "Serve the Todo Task Manager API documentation locally",
    long_about = "Serves api-docs.html and swagger.yaml from a directory with CORS headers and opens the docs in a browser."
)]
pub struct ServeDocsArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = env_vars::DOCS_PORT, default_value_t = docs::DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = env_vars::DOCS_HOST, default_value = docs::DEFAULT_HOST)]
    pub host: String,

    /// Directory to serve
    #[arg(long, short = 'd', env = env_vars::DOCS_DIRECTORY, default_value = docs::DEFAULT_DIRECTORY)]
    pub directory: PathBuf,

    /// Do not open the browser
    #[arg(
        long,
        env = env_vars::DOCS_NO_BROWSER,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub no_browser: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl ServeDocsArgs {
    /// Validate the arguments into a server config
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the port is zero
    pub fn into_config(self) -> AppResult<DocsServerConfig> {
        DocsServerConfig::new(self.host, self.port, self.directory, !self.no_browser)
    }
}

/// Hint prefix used by `load-test-data`
pub const LOADER_HINT_MARKER: &str = "   ";

/// Hint prefix used by `serve-docs`
pub const DOCS_HINT_MARKER: &str = "💡 ";

/// Render a fatal error the way the binaries print it to stderr
///
/// The hint, when present, follows on its own line behind `hint_marker`.
#[must_use]
pub fn render_error(error: &AppError, hint_marker: &str) -> String {
    let mut rendered = match error.code {
        // the failed login request was already reported line by line
        ErrorCode::AuthInvalid => format!("❌ {}", error.message),
        _ => format!("❌ Error: {}", error.message),
    };
    if let Some(hint) = &error.hint {
        rendered.push('\n');
        rendered.push_str(hint_marker);
        rendered.push_str(hint);
    }
    rendered
}
