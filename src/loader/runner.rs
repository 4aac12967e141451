// ABOUTME: Sequential seeding flow: register users, log in, create tasks
// ABOUTME: Per-request failures are counted; only a bad user index or failed login abort
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::client::TodoApiClient;
use super::fixture::load_fixture;
use super::reporter::{SeedEvent, SeedReporter};
use crate::config::environment::LoaderConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{FixtureData, FixtureUser};
use std::time::Duration;
use tracing::{info, instrument};

/// Counters for a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    /// Fixture user count
    pub users_total: usize,
    /// Users created or already present
    pub users_registered: usize,
    /// Fixture task count
    pub tasks_total: usize,
    /// Tasks created
    pub tasks_created: usize,
    /// Email of the user owning the tasks
    pub target_email: String,
}

/// Print the run header, read the fixture, and seed the configured API
///
/// The header goes out before the fixture is read so a missing file still
/// shows which API the run was aimed at.
///
/// # Errors
///
/// - `ConfigMissing` / `InvalidFormat` if the fixture cannot be loaded
/// - `InternalError` if the HTTP client cannot be built
/// - everything [`seed`] returns
pub async fn load_and_seed<R>(config: &LoaderConfig, reporter: &mut R) -> AppResult<SeedReport>
where
    R: SeedReporter + ?Sized,
{
    reporter.report(SeedEvent::Started {
        api_url: &config.api_url,
    });
    let fixture = load_fixture(&config.fixture_path)?;
    let client = TodoApiClient::new(&config.api_url, config.request_timeout)?;
    seed(config, &client, &fixture, reporter).await
}

/// Seed the API with every fixture user and task
///
/// Every user is registered before the task owner is looked up, so a bad
/// `user_index` still leaves the users in place.
///
/// # Errors
///
/// - `ValueOutOfRange` if `config.user_index` does not select a fixture user
/// - `AuthInvalid` if the selected user cannot log in
#[instrument(skip_all, fields(api_url = %client.base_url(), user_index = config.user_index))]
pub async fn seed<R>(
    config: &LoaderConfig,
    client: &TodoApiClient,
    fixture: &FixtureData,
    reporter: &mut R,
) -> AppResult<SeedReport>
where
    R: SeedReporter + ?Sized,
{
    let users = &fixture.users;
    let tasks = &fixture.tasks;

    reporter.report(SeedEvent::FixtureLoaded {
        users: users.len(),
        tasks: tasks.len(),
    });

    reporter.report(SeedEvent::RegisteringUsers);
    let mut users_registered = 0;
    for user in users {
        let outcome = client.register_user(user).await;
        if outcome.is_success() {
            users_registered += 1;
        }
        reporter.report(SeedEvent::UserRegistration {
            email: &user.email,
            outcome: &outcome,
        });
        pause(config.register_delay).await;
    }
    reporter.report(SeedEvent::UsersProcessed {
        registered: users_registered,
        total: users.len(),
    });

    let target = select_user(users, config.user_index)?;
    reporter.report(SeedEvent::LoggingIn {
        email: &target.email,
    });
    let login = client.login(&target.email, &target.password).await;
    reporter.report(SeedEvent::Login {
        email: &target.email,
        outcome: &login,
    });
    let Some(token) = login.into_token() else {
        return Err(AppError::auth_invalid("Could not login to create tasks"));
    };

    reporter.report(SeedEvent::CreatingTasks);
    let mut tasks_created = 0;
    for task in tasks {
        let outcome = client.create_task(&token, task).await;
        if outcome.is_success() {
            tasks_created += 1;
        }
        reporter.report(SeedEvent::TaskCreation {
            title: &task.title,
            outcome: &outcome,
        });
        pause(config.task_delay).await;
    }
    reporter.report(SeedEvent::TasksCreated {
        created: tasks_created,
        total: tasks.len(),
    });

    let report = SeedReport {
        users_total: users.len(),
        users_registered,
        tasks_total: tasks.len(),
        tasks_created,
        target_email: target.email.clone(),
    };
    info!(
        users_registered,
        tasks_created,
        target = %report.target_email,
        "seeding finished"
    );
    reporter.report(SeedEvent::Finished {
        report: &report,
        users,
        user_index: config.user_index,
    });
    Ok(report)
}

/// Pick the task owner, rejecting indexes outside the fixture
///
/// # Errors
///
/// Returns `ValueOutOfRange` when `users` is empty or `index` is past the end
pub fn select_user(users: &[FixtureUser], index: usize) -> AppResult<&FixtureUser> {
    if users.is_empty() {
        return Err(AppError::out_of_range(format!(
            "User index {index} is out of range: no users in test data"
        )));
    }
    users.get(index).ok_or_else(|| {
        AppError::out_of_range(format!(
            "User index {index} is out of range (0-{})",
            users.len() - 1
        ))
    })
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serde_json::Map;

    fn users(n: usize) -> Vec<FixtureUser> {
        (0..n)
            .map(|i| FixtureUser {
                email: format!("user{i}@example.com"),
                password: "password123".into(),
                extra: Map::new(),
            })
            .collect()
    }

    #[test]
    fn test_select_user_in_range() {
        let fixture_users = users(3);
        assert_eq!(
            select_user(&fixture_users, 2).unwrap().email,
            "user2@example.com"
        );
    }

    #[test]
    fn test_select_user_out_of_range_message() {
        let error = select_user(&users(3), 5).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.message, "User index 5 is out of range (0-2)");
    }

    #[test]
    fn test_select_user_empty_fixture() {
        let error = select_user(&[], 0).unwrap_err();
        assert!(error.message.contains("no users in test data"));
    }
}
