// ABOUTME: Progress events emitted while seeding and their human-readable rendering
// ABOUTME: Stdout reporter for the binary and an in-memory reporter for tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::client::{LoginOutcome, RegistrationOutcome, TaskOutcome};
use super::runner::SeedReport;
use crate::constants::loader::{API_DOCS_URL, FRONTEND_URL};
use crate::models::FixtureUser;
use std::fmt;

const RULE: &str = "============================================================";

/// One step of a seeding run
#[derive(Debug, Clone, Copy)]
pub enum SeedEvent<'a> {
    /// Run started, before the fixture is read
    Started {
        /// Target API
        api_url: &'a str,
    },
    /// Fixture parsed
    FixtureLoaded {
        /// Fixture user count
        users: usize,
        /// Fixture task count
        tasks: usize,
    },
    /// Registration phase started
    RegisteringUsers,
    /// One registration request finished
    UserRegistration {
        /// User email
        email: &'a str,
        /// Outcome of the request
        outcome: &'a RegistrationOutcome,
    },
    /// Registration phase finished
    UsersProcessed {
        /// Successful registrations (created or existing)
        registered: usize,
        /// Fixture user count
        total: usize,
    },
    /// Login started
    LoggingIn {
        /// Target user email
        email: &'a str,
    },
    /// Login finished
    Login {
        /// Target user email
        email: &'a str,
        /// Outcome of the request
        outcome: &'a LoginOutcome,
    },
    /// Task phase started
    CreatingTasks,
    /// One task request finished
    TaskCreation {
        /// Task title
        title: &'a str,
        /// Outcome of the request
        outcome: &'a TaskOutcome,
    },
    /// Task phase finished
    TasksCreated {
        /// Tasks created
        created: usize,
        /// Fixture task count
        total: usize,
    },
    /// Final summary with the credential list
    Finished {
        /// Run counters
        report: &'a SeedReport,
        /// Every fixture user
        users: &'a [FixtureUser],
        /// Index of the user owning the tasks
        user_index: usize,
    },
}

impl fmt::Display for SeedEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Started { api_url } => {
                writeln!(f, "🚀 Loading test data into Todo Task Manager")?;
                writeln!(f, "📡 API URL: {api_url}")?;
                write!(f, "{RULE}")
            }
            Self::FixtureLoaded { users, tasks } => {
                writeln!(f, "📊 Found {users} users and {tasks} tasks in test data")
            }
            Self::RegisteringUsers => write!(f, "👥 Registering users..."),
            Self::UserRegistration { email, outcome } => match outcome {
                RegistrationOutcome::Created => write!(f, "✅ Registered user: {email}"),
                RegistrationOutcome::AlreadyExists => {
                    write!(f, "⚠️  User already exists: {email}")
                }
                RegistrationOutcome::Rejected { status, body } => {
                    write!(f, "❌ Failed to register {email}: {status} - {body}")
                }
                RegistrationOutcome::NetworkError(message) => {
                    write!(f, "❌ Network error registering {email}: {message}")
                }
            },
            Self::UsersProcessed { registered, total } => {
                writeln!(f, "✅ Successfully processed {registered}/{total} users")
            }
            Self::LoggingIn { email } => {
                write!(f, "🔑 Logging in as {email} to create tasks...")
            }
            Self::Login { email, outcome } => match outcome {
                LoginOutcome::Token(_) => write!(f, "✅ Logged in: {email}"),
                LoginOutcome::MissingToken => write!(f, "❌ No token received for {email}"),
                LoginOutcome::Rejected { status, body } => {
                    write!(f, "❌ Failed to login {email}: {status} - {body}")
                }
                LoginOutcome::NetworkError(message) => {
                    write!(f, "❌ Network error logging in {email}: {message}")
                }
            },
            Self::CreatingTasks => write!(f, "📝 Creating tasks..."),
            Self::TaskCreation { title, outcome } => match outcome {
                TaskOutcome::Created => write!(f, "✅ Created task: {title}"),
                TaskOutcome::Rejected { status, body } => {
                    write!(f, "❌ Failed to create task '{title}': {status} - {body}")
                }
                TaskOutcome::NetworkError(message) => {
                    write!(f, "❌ Network error creating task '{title}': {message}")
                }
            },
            Self::TasksCreated { created, total } => {
                writeln!(f, "✅ Successfully created {created}/{total} tasks")
            }
            Self::Finished {
                report,
                users,
                user_index,
            } => {
                writeln!(f, "🎉 Test data loading completed!")?;
                writeln!(f, "{RULE}")?;
                writeln!(f, "📋 Summary:")?;
                writeln!(f, "   👥 Users registered: {}", report.users_registered)?;
                writeln!(f, "   📝 Tasks created: {}", report.tasks_created)?;
                writeln!(f, "   🔑 Tasks created for: {}", report.target_email)?;
                writeln!(f)?;
                writeln!(f, "🌐 You can now test your application with this data!")?;
                writeln!(f, "   Frontend: {FRONTEND_URL}")?;
                writeln!(f, "   API Docs: {API_DOCS_URL}")?;
                writeln!(f)?;
                write!(f, "💡 Login credentials for testing:")?;
                for (i, user) in users.iter().enumerate() {
                    let marker = if i == user_index { " 👈 (has tasks)" } else { "" };
                    write!(f, "\n   📧 {} / 🔐 {}{marker}", user.email, user.password)?;
                }
                Ok(())
            }
        }
    }
}

/// Sink for seeding progress
pub trait SeedReporter {
    /// Record one event
    fn report(&mut self, event: SeedEvent<'_>);
}

/// Prints every event to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl SeedReporter for StdoutReporter {
    fn report(&mut self, event: SeedEvent<'_>) {
        println!("{event}");
    }
}

/// Collects rendered lines in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    /// Rendered output, one entry per line
    pub lines: Vec<String>,
}

impl MemoryReporter {
    /// Whether any rendered line contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl SeedReporter for MemoryReporter {
    fn report(&mut self, event: SeedEvent<'_>) {
        self.lines
            .extend(event.to_string().lines().map(str::to_owned));
    }
}
