// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Endpoint paths, default ports and delays, fixture names, and CORS header values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module
//!
//! Pure data constants grouped by the tool that consumes them.

/// Todo-task-manager API endpoints, relative to the API base URL
pub mod endpoints {
    /// User registration
    pub const REGISTER: &str = "/auth/register";
    /// User login, returns a bearer token
    pub const LOGIN: &str = "/auth/login";
    /// Task creation (authenticated)
    pub const TASKS: &str = "/tasks";
}

/// Test-data loader defaults
pub mod loader {
    /// Deployed API base URL used when none is configured
    pub const DEFAULT_API_URL: &str = "https://2gg5dchmo6.execute-api.us-east-1.amazonaws.com/dev";
    /// Fixture file read from the working directory
    pub const DEFAULT_FIXTURE_PATH: &str = "test-data.json";
    /// Pause after each registration request, in milliseconds
    pub const DEFAULT_REGISTER_DELAY_MS: u64 = 500;
    /// Pause after each task-creation request, in milliseconds
    pub const DEFAULT_TASK_DELAY_MS: u64 = 300;
    /// Per-request timeout, in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Frontend URL printed in the summary
    pub const FRONTEND_URL: &str = "http://localhost:3000";
    /// Documentation URL printed in the summary
    pub const API_DOCS_URL: &str = "http://localhost:8080/api-docs.html";
}

/// Documentation server defaults
pub mod docs {
    /// Default listening port
    pub const DEFAULT_PORT: u16 = 8080;
    /// Default bind address (all interfaces)
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Default directory served
    pub const DEFAULT_DIRECTORY: &str = ".";
    /// Swagger UI page opened in the browser
    pub const DOCS_PAGE: &str = "api-docs.html";
    /// OpenAPI document advertised in the banner
    pub const SWAGGER_FILE: &str = "swagger.yaml";
}

/// CORS header values injected on every docs server response
pub mod cors {
    /// `Access-Control-Allow-Origin`
    pub const ALLOW_ORIGIN: &str = "*";
    /// `Access-Control-Allow-Methods`
    pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
    /// `Access-Control-Allow-Headers`
    pub const ALLOW_HEADERS: &str = "Content-Type";
}

/// Environment variable names
pub mod env_vars {
    /// API base URL for the loader
    pub const API_URL: &str = "TODO_API_URL";
    /// Fixture file path
    pub const FIXTURE_PATH: &str = "TEST_DATA_PATH";
    /// Index of the user that receives the tasks
    pub const USER_INDEX: &str = "SEED_USER_INDEX";
    /// Registration delay in milliseconds
    pub const REGISTER_DELAY_MS: &str = "SEED_REGISTER_DELAY_MS";
    /// Task-creation delay in milliseconds
    pub const TASK_DELAY_MS: &str = "SEED_TASK_DELAY_MS";
    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "SEED_REQUEST_TIMEOUT_SECS";
    /// Docs server port
    pub const DOCS_PORT: &str = "DOCS_PORT";
    /// Docs server bind address
    pub const DOCS_HOST: &str = "DOCS_HOST";
    /// Directory served by the docs server
    pub const DOCS_DIRECTORY: &str = "DOCS_DIRECTORY";
    /// Disable browser launch
    pub const DOCS_NO_BROWSER: &str = "DOCS_NO_BROWSER";
}
