// ABOUTME: Runtime configuration for the test-data loader and the docs server
// ABOUTME: Validating constructors for API URLs, request timeouts, and ports
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Validated runtime configuration
//!
//! The binaries fold flags and environment variables together through clap
//! (see [`crate::cli`]) and build these structs only through the validating
//! constructors below.

use crate::constants::{docs, loader};
use crate::errors::{AppError, AppResult};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Settings for one seeding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// API base URL without a trailing slash
    pub api_url: String,
    /// Fixture file to read
    pub fixture_path: PathBuf,
    /// Index of the fixture user that receives the tasks
    pub user_index: usize,
    /// Pause after each registration request
    pub register_delay: Duration,
    /// Pause after each task-creation request
    pub task_delay: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl LoaderConfig {
    /// Create a config for `api_url` with every other setting at its default
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the URL is not an absolute http(s) URL
    pub fn new(api_url: &str) -> AppResult<Self> {
        Ok(Self {
            api_url: normalize_api_url(api_url)?,
            fixture_path: PathBuf::from(loader::DEFAULT_FIXTURE_PATH),
            user_index: 0,
            register_delay: Duration::from_millis(loader::DEFAULT_REGISTER_DELAY_MS),
            task_delay: Duration::from_millis(loader::DEFAULT_TASK_DELAY_MS),
            request_timeout: Duration::from_secs(loader::DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// Replace the per-request timeout
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero timeout, which would fail every request
    pub fn with_request_timeout(mut self, timeout: Duration) -> AppResult<Self> {
        if timeout.is_zero() {
            return Err(AppError::config_invalid(
                "Request timeout must be at least 1 second",
            ));
        }
        self.request_timeout = timeout;
        Ok(self)
    }

    /// Disable both request delays
    #[must_use]
    pub const fn without_delays(mut self) -> Self {
        self.register_delay = Duration::ZERO;
        self.task_delay = Duration::ZERO;
        self
    }
}

/// Settings for the documentation server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsServerConfig {
    /// Bind address
    pub host: String,
    /// Listening port, never zero
    pub port: u16,
    /// Directory served as the document root
    pub directory: PathBuf,
    /// Open the docs page in the default browser after binding
    pub open_browser: bool,
}

impl DocsServerConfig {
    /// Create a config, validating the port
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `port` is zero
    pub fn new(
        host: impl Into<String>,
        port: u16,
        directory: impl Into<PathBuf>,
        open_browser: bool,
    ) -> AppResult<Self> {
        if port == 0 {
            return Err(AppError::config_invalid("Port must be between 1 and 65535"));
        }
        Ok(Self {
            host: host.into(),
            port,
            directory: directory.into(),
            open_browser,
        })
    }

    /// `host:port` string passed to the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Browser-facing base URL; always `localhost` since the bind host may be a wildcard
    #[must_use]
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// URL of the Swagger UI page
    #[must_use]
    pub fn docs_page_url(&self) -> String {
        format!("{}/{}", self.local_url(), docs::DOCS_PAGE)
    }
}

/// Validate an API base URL and strip trailing slashes
///
/// # Errors
///
/// Returns `ConfigInvalid` if the value is not an absolute http(s) URL
pub fn normalize_api_url(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| {
        AppError::config_invalid(format!("Invalid API URL '{raw}': {e}")).with_source(e)
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_owned()),
        other => Err(AppError::config_invalid(format!(
            "Invalid API URL '{raw}': unsupported scheme '{other}'"
        ))),
    }
}
