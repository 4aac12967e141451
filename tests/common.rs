// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, fixture builders, and an in-process docs server
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `todo_devtools`

use serde_json::{json, Map};
use std::net::SocketAddr;
use std::sync::Once;
use todo_devtools::config::environment::{DocsServerConfig, LoaderConfig};
use todo_devtools::docs_server::{build_router, serve};
use todo_devtools::errors::AppResult;
use todo_devtools::models::{FixtureData, FixtureTask, FixtureUser};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixture user with the registration extras the real fixture carries
pub fn fixture_user(email: &str) -> FixtureUser {
    let mut extra = Map::new();
    extra.insert("firstName".into(), json!("Test"));
    extra.insert("lastName".into(), json!("User"));
    FixtureUser {
        email: email.into(),
        password: "password123".into(),
        extra,
    }
}

/// Fixture task with priority and due date extras
pub fn fixture_task(title: &str) -> FixtureTask {
    let mut extra = Map::new();
    extra.insert("description".into(), json!(format!("{title} description")));
    extra.insert("priority".into(), json!("MEDIUM"));
    extra.insert("dueDate".into(), json!("2025-12-31"));
    FixtureTask {
        title: title.into(),
        extra,
    }
}

/// Fixture with `users` numbered users and `tasks` numbered tasks
pub fn sample_fixture(users: usize, tasks: usize) -> FixtureData {
    FixtureData {
        users: (0..users)
            .map(|i| fixture_user(&format!("user{i}@example.com")))
            .collect(),
        tasks: (0..tasks).map(|i| fixture_task(&format!("Task {i}"))).collect(),
    }
}

/// Loader config pointing at `api_url` with no delays
pub fn fast_loader_config(api_url: &str, user_index: usize) -> LoaderConfig {
    let mut config = LoaderConfig::new(api_url).unwrap().without_delays();
    config.user_index = user_index;
    config
}

/// Docs server running on an ephemeral port
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<AppResult<()>>,
}

impl TestServer {
    /// Serve `directory` on `127.0.0.1:0`
    pub async fn start(directory: &std::path::Path) -> Self {
        init_test_logging();
        let config = DocsServerConfig::new("127.0.0.1", 8080, directory, false).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        let handle = tokio::spawn(serve(listener, build_router(&config), async {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    /// Absolute URL for `path`
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Stop the server and wait for the accept loop to exit
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}
