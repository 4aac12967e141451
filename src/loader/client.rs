// ABOUTME: HTTP client for the todo-task-manager API used by the loader
// ABOUTME: Registration, login, and task creation with per-call outcome enums
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Thin client over the three API endpoints the loader needs.
//!
//! Calls never return `Err`: every HTTP status and transport failure is folded
//! into an outcome value so a single failed request cannot abort a run.

use crate::config::environment::normalize_api_url;
use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};
use crate::models::{extract_token, FixtureTask, FixtureUser, LoginRequest};
use reqwest::{header, Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Result of `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// 201
    Created,
    /// 409, the user is already there
    AlreadyExists,
    /// Any other status
    Rejected {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// The request never produced a response
    NetworkError(String),
}

impl RegistrationOutcome {
    /// Created and already-existing users both count as processed
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Created | Self::AlreadyExists)
    }
}

/// Result of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 200 with a bearer token
    Token(String),
    /// 200 but no token in the body
    MissingToken,
    /// Any other status
    Rejected {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// The request never produced a response
    NetworkError(String),
}

impl LoginOutcome {
    /// Whether a token was obtained
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    /// Take the token, if any
    #[must_use]
    pub fn into_token(self) -> Option<String> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }
}

/// Result of `POST /tasks`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// 201
    Created,
    /// Any other status
    Rejected {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// The request never produced a response
    NetworkError(String),
}

impl TaskOutcome {
    /// Whether the task was created
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Raw response or transport failure for one request
enum Reply {
    Response { status: StatusCode, body: String },
    Failed(String),
}

/// Client for the todo-task-manager API
#[derive(Debug, Clone)]
pub struct TodoApiClient {
    base_url: String,
    client: Client,
}

impl TodoApiClient {
    /// Create a client for `base_url` with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a malformed URL, or an internal error if the
    /// TLS backend cannot be initialized
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: normalize_api_url(base_url)?,
            client,
        })
    }

    /// API base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register one fixture user
    pub async fn register_user(&self, user: &FixtureUser) -> RegistrationOutcome {
        match self.post(endpoints::REGISTER, user, None).await {
            Reply::Response { status, .. } if status == StatusCode::CREATED => {
                RegistrationOutcome::Created
            }
            Reply::Response { status, .. } if status == StatusCode::CONFLICT => {
                RegistrationOutcome::AlreadyExists
            }
            Reply::Response { status, body } => RegistrationOutcome::Rejected {
                status: status.as_u16(),
                body,
            },
            Reply::Failed(message) => RegistrationOutcome::NetworkError(message),
        }
    }

    /// Log in and extract the bearer token
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let request = LoginRequest::new(email, password);
        match self.post(endpoints::LOGIN, &request, None).await {
            Reply::Response { status, body } if status == StatusCode::OK => {
                serde_json::from_str(&body)
                    .ok()
                    .and_then(|value| extract_token(&value))
                    .map_or(LoginOutcome::MissingToken, LoginOutcome::Token)
            }
            Reply::Response { status, body } => LoginOutcome::Rejected {
                status: status.as_u16(),
                body,
            },
            Reply::Failed(message) => LoginOutcome::NetworkError(message),
        }
    }

    /// Create one task on behalf of the token's owner
    pub async fn create_task(&self, token: &str, task: &FixtureTask) -> TaskOutcome {
        match self.post(endpoints::TASKS, task, Some(token)).await {
            Reply::Response { status, .. } if status == StatusCode::CREATED => TaskOutcome::Created,
            Reply::Response { status, body } => TaskOutcome::Rejected {
                status: status.as_u16(),
                body,
            },
            Reply::Failed(message) => TaskOutcome::NetworkError(message),
        }
    }

    async fn post<T: Serialize + Sync>(&self, path: &str, body: &T, token: Option<&str>) -> Reply {
        let url = format!("{}{path}", self.base_url);
        let mut request = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "api request failed");
                return Reply::Failed(e.to_string());
            }
        };

        let status = response.status();
        match response.text().await {
            Ok(body) => {
                debug!(%url, status = status.as_u16(), "api response");
                Reply::Response { status, body }
            }
            Err(e) => {
                warn!(%url, status = status.as_u16(), error = %e, "api response body unreadable");
                Reply::Failed(e.to_string())
            }
        }
    }
}
