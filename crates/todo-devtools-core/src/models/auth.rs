// ABOUTME: Login request body and bearer token extraction for the todo API
// ABOUTME: Accepts both a top-level token and the ApiResponse envelope's data.token
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl LoginRequest {
    /// Build a login request from borrowed credentials
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Pull the bearer token out of a login response body.
///
/// The token is read from `token` first, then from `data.token` (the
/// `{success, data, message, error}` envelope). Empty strings are treated as absent.
#[must_use]
pub fn extract_token(body: &Value) -> Option<String> {
    body.get("token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .or_else(|| {
            body.get("data")
                .and_then(|data| data.get("token"))
                .and_then(Value::as_str)
                .filter(|token| !token.is_empty())
        })
        .map(str::to_owned)
}
