// ABOUTME: Configuration module for the loader and the docs server
// ABOUTME: Environment-driven settings with validation on construction
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Environment-based configuration structs
pub mod environment;
