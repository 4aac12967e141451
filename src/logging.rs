// ABOUTME: Logging configuration and structured logging setup for both binaries
// ABOUTME: Configures log levels, output format, and noise reduction for HTTP libraries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging with `tracing`.
//!
//! Diagnostics are written to stderr so the per-request status lines the tools
//! print on stdout stay clean.

use crate::errors::{AppError, AppResult};
use std::env;
use std::io;
use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Directives always appended to the filter to keep HTTP internals quiet
const NOISE_REDUCTION: &[&str] = &["hyper=warn", "hyper_util=warn", "reqwest=warn", "tower_http=info"];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name recorded in the startup event
    pub service_name: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines
    Json,
    /// Multi-line human format
    Pretty,
    /// Single-line human format
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Pretty`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            service_name: env!("CARGO_PKG_NAME").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT` and `LOG_INCLUDE_LOCATION`.
    #[must_use]
    pub fn from_env(service_name: &str) -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Pretty, |value| LogFormat::from_str_or_default(&value));

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: service_name.to_owned(),
        }
    }

    /// Force debug output (the `--verbose` flag)
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.level = "debug".into();
        }
        self
    }

    /// Build the filter: the configured level plus the noise reduction directives
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        NOISE_REDUCTION
            .iter()
            .fold(EnvFilter::new(&self.level), |filter, directive| {
                filter.add_directive(
                    directive
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::WARN.into()),
                )
            })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(false)
                        .with_line_number(false)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

        debug!(
            service.name = %self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            log.level = %self.level,
            log.format = ?self.format,
            "logging initialized"
        );
        Ok(())
    }
}
