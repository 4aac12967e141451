// ABOUTME: Test-data loader that seeds the todo API with fixture users and tasks
// ABOUTME: Combines fixture parsing, the HTTP client, the seeding flow, and progress reporting
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// HTTP client for the todo API
pub mod client;
/// Fixture file loading
pub mod fixture;
/// Progress and summary output
pub mod reporter;
/// Sequential seeding flow
pub mod runner;

pub use client::{LoginOutcome, RegistrationOutcome, TaskOutcome, TodoApiClient};
pub use reporter::{MemoryReporter, SeedEvent, SeedReporter, StdoutReporter};
pub use runner::{load_and_seed, seed, SeedReport};
