// ABOUTME: Unified error type and error codes shared by the loader and the docs server
// ABOUTME: Maps error codes to HTTP statuses and converts io errors into AppError
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. An
//! [`AppError`] pairs a stable [`ErrorCode`] with a human-readable message and
//! an optional source error for chaining.

#[cfg(feature = "http-response")]
mod http_response;

use std::fmt;
use thiserror::Error;

/// Failure categories for the loader and the docs server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Login rejected or returned no token
    AuthInvalid,
    /// Fixture file is not valid JSON of the expected shape
    InvalidFormat,
    /// User index past the end of the fixture
    ValueOutOfRange,
    /// Docs path outside the root or absent
    ResourceNotFound,
    /// Server could not start or stopped with an error
    ConfigError,
    /// Fixture file or docs directory does not exist
    ConfigMissing,
    /// Rejected flag or environment value
    ConfigInvalid,
    /// Docs port already bound
    PortInUse,
    /// HTTP client or logging could not be built
    InternalError,
    /// Filesystem read failure
    StorageError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidFormat | Self::ValueOutOfRange => 400,

            // 401 Unauthorized
            Self::AuthInvalid => 401,

            // 404 Not Found
            Self::ResourceNotFound => 404,

            // 500 Internal Server Error
            Self::InternalError
            | Self::StorageError
            | Self::ConfigError
            | Self::ConfigMissing
            | Self::ConfigInvalid
            | Self::PortInUse => 500,
        }
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional hint shown to the operator after the message
    pub hint: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            hint: None,
            source: None,
        }
    }

    /// Attach an operator-facing hint
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid authentication
    #[must_use]
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid data format
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value outside the accepted range
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Missing configuration or input file
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Invalid configuration value
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Listening port already taken
    #[must_use]
    pub fn port_in_use(port: u16) -> Self {
        Self::new(
            ErrorCode::PortInUse,
            format!("Port {port} is already in use!"),
        )
        .with_hint("Try using a different port or stop the existing server")
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}
