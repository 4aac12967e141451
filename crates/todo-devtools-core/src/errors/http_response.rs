// ABOUTME: axum IntoResponse integration for AppError
// ABOUTME: Renders errors as plain-text bodies with the status mapped from the error code
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::AppError;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(code = ?self.code, "{}", self.message);
        } else {
            tracing::debug!(code = ?self.code, "{}", self.message);
        }
        (status, self.message).into_response()
    }
}
