// ABOUTME: Test-data loader binary for the Todo Task Manager API
// ABOUTME: Registers fixture users, logs in as one of them, and creates the fixture tasks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Usage:
//! ```bash
//! # Seed the default deployment from ./test-data.json
//! load-test-data
//!
//! # Seed a local API and give the tasks to the second user
//! load-test-data --api-url http://localhost:3001 --user-index 1
//!
//! # No delays, debug logging
//! load-test-data --register-delay-ms 0 --task-delay-ms 0 -v
//! ```

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use todo_devtools::cli::{render_error, LoadTestDataArgs, LOADER_HINT_MARKER};
use todo_devtools::errors::AppError;
use todo_devtools::loader::{load_and_seed, StdoutReporter};
use todo_devtools::logging::LoggingConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = LoadTestDataArgs::parse();

    if let Err(e) = LoggingConfig::from_env("load-test-data")
        .with_verbose(args.verbose)
        .init()
    {
        eprintln!("⚠️  {e}");
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "test data loading failed");
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: LoadTestDataArgs) -> Result<()> {
    let config = args.into_config()?;
    info!(api_url = %config.api_url, fixture = %config.fixture_path.display(), "starting test data load");

    load_and_seed(&config, &mut StdoutReporter).await?;
    Ok(())
}

fn report_error(error: &anyhow::Error) {
    match error.downcast_ref::<AppError>() {
        Some(e) => eprintln!("{}", render_error(e, LOADER_HINT_MARKER)),
        None => eprintln!("❌ Error: {error}"),
    }
}
