// ABOUTME: Reads and validates the JSON fixture describing users and tasks to seed
// ABOUTME: Maps missing files and malformed JSON to configuration and format errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::errors::{AppError, AppResult};
use crate::models::FixtureData;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Hint printed when the fixture cannot be found
pub const MISSING_FIXTURE_HINT: &str =
    "Make sure you're running this from the project root directory.";

/// Load the fixture document from `path`
///
/// # Errors
///
/// - `ConfigMissing` if the file does not exist
/// - `InvalidFormat` if the content is not valid fixture JSON
/// - `StorageError` for any other read failure
pub fn load_fixture(path: &Path) -> AppResult<FixtureData> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::config_missing(format!("{} file not found!", path.display()))
                .with_hint(MISSING_FIXTURE_HINT)
                .with_source(e)
        } else {
            AppError::from(e)
        }
    })?;

    let fixture: FixtureData = serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_format(format!("Invalid JSON in {}: {e}", path.display())).with_source(e)
    })?;

    debug!(
        path = %path.display(),
        users = fixture.users.len(),
        tasks = fixture.tasks.len(),
        "fixture loaded"
    );
    Ok(fixture)
}
