// ABOUTME: Core types and constants for the todo-task-manager developer tools
// ABOUTME: Foundation crate with error handling, fixture models, and constants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Todo Devtools Core
//!
//! Foundation crate providing shared types and constants for the test-data
//! loader and the documentation server. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Endpoint paths, default ports, delays, and CORS values
//! - **models**: Fixture file types and the todo API wire types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Fixture data and todo API request/response models
pub mod models;
