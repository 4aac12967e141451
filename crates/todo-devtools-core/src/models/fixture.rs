// ABOUTME: Fixture file types describing the sample users and tasks to seed
// ABOUTME: Unknown fields are kept so request bodies match the fixture exactly
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level fixture document: `{"users": [...], "tasks": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureData {
    /// Users to register
    pub users: Vec<FixtureUser>,
    /// Tasks created for the selected user
    pub tasks: Vec<FixtureTask>,
}

/// A user entry; serialized as-is for `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureUser {
    /// Login email
    pub email: String,
    /// Login password
    pub password: String,
    /// Remaining registration fields such as `firstName` and `lastName`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A task entry; serialized as-is for `POST /tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureTask {
    /// Task title
    pub title: String,
    /// Remaining task fields such as `description`, `priority`, `dueDate`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
