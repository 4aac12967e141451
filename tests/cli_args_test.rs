// ABOUTME: Tests for command-line parsing of both binaries
// ABOUTME: Checks defaults, flag overrides, and flag-over-environment precedence
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use clap::Parser;
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use todo_devtools::cli::{LoadTestDataArgs, ServeDocsArgs};
use todo_devtools::constants::{env_vars, loader};

fn clear_env() {
    for var in [
        env_vars::API_URL,
        env_vars::FIXTURE_PATH,
        env_vars::USER_INDEX,
        env_vars::REGISTER_DELAY_MS,
        env_vars::TASK_DELAY_MS,
        env_vars::REQUEST_TIMEOUT_SECS,
        env_vars::DOCS_PORT,
        env_vars::DOCS_HOST,
        env_vars::DOCS_DIRECTORY,
        env_vars::DOCS_NO_BROWSER,
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_test_data_defaults() {
    clear_env();
    let config = LoadTestDataArgs::try_parse_from(["load-test-data"])
        .unwrap()
        .into_config()
        .unwrap();

    assert_eq!(config.api_url, loader::DEFAULT_API_URL);
    assert_eq!(config.user_index, 0);
    assert_eq!(config.fixture_path, PathBuf::from("test-data.json"));
    assert_eq!(config.register_delay, Duration::from_millis(500));
    assert_eq!(config.task_delay, Duration::from_millis(300));
}

#[test]
#[serial]
fn test_load_test_data_flags() {
    clear_env();
    let args = LoadTestDataArgs::try_parse_from([
        "load-test-data",
        "--api-url",
        "http://localhost:3001/",
        "--user-index",
        "3",
        "--fixture",
        "seed.json",
        "--register-delay-ms",
        "0",
        "--task-delay-ms",
        "0",
        "-v",
    ])
    .unwrap();
    assert!(args.verbose);

    let config = args.into_config().unwrap();
    assert_eq!(config.api_url, "http://localhost:3001");
    assert_eq!(config.user_index, 3);
    assert_eq!(config.fixture_path, PathBuf::from("seed.json"));
    assert!(config.register_delay.is_zero());
}

#[test]
#[serial]
fn test_flag_wins_over_environment() {
    clear_env();
    env::set_var(env_vars::API_URL, "http://from-env.test");
    env::set_var(env_vars::USER_INDEX, "1");

    let from_env = LoadTestDataArgs::try_parse_from(["load-test-data"])
        .unwrap()
        .into_config()
        .unwrap();
    let from_flag =
        LoadTestDataArgs::try_parse_from(["load-test-data", "--api-url", "http://flag.test"])
            .unwrap()
            .into_config()
            .unwrap();
    clear_env();

    assert_eq!(from_env.api_url, "http://from-env.test");
    assert_eq!(from_env.user_index, 1);
    assert_eq!(from_flag.api_url, "http://flag.test");
}

#[test]
#[serial]
fn test_load_test_data_rejects_negative_index() {
    clear_env();
    assert!(LoadTestDataArgs::try_parse_from(["load-test-data", "--user-index", "-1"]).is_err());
}

#[test]
#[serial]
fn test_serve_docs_defaults_and_flags() {
    clear_env();
    let config = ServeDocsArgs::try_parse_from(["serve-docs"])
        .unwrap()
        .into_config()
        .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.directory, PathBuf::from("."));
    assert!(config.open_browser);

    let config = ServeDocsArgs::try_parse_from([
        "serve-docs",
        "--port",
        "9000",
        "--directory",
        "docs",
        "--no-browser",
    ])
    .unwrap()
    .into_config()
    .unwrap();
    assert_eq!(config.port, 9000);
    assert_eq!(config.directory, PathBuf::from("docs"));
    assert!(!config.open_browser);
}

#[test]
#[serial]
fn test_serve_docs_no_browser_from_environment() {
    clear_env();
    env::set_var(env_vars::DOCS_NO_BROWSER, "1");
    let config = ServeDocsArgs::try_parse_from(["serve-docs"])
        .unwrap()
        .into_config()
        .unwrap();
    clear_env();

    assert!(!config.open_browser);
}

#[test]
#[serial]
fn test_serve_docs_rejects_port_zero() {
    clear_env();
    let args = ServeDocsArgs::try_parse_from(["serve-docs", "--port", "0"]).unwrap();
    assert!(args.into_config().is_err());
}
