// ABOUTME: Data models shared by the test-data loader and its API client
// ABOUTME: Re-exports fixture file types and the todo API auth wire types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Data Models
//!
//! - `FixtureData`, `FixtureUser`, `FixtureTask`: the JSON fixture read by the loader.
//!   Fields the loader does not interpret are preserved and forwarded to the API verbatim.
//! - `LoginRequest`, `extract_token`: the login exchange with the todo API.

mod auth;
mod fixture;

pub use auth::{extract_token, LoginRequest};
pub use fixture::{FixtureData, FixtureTask, FixtureUser};
