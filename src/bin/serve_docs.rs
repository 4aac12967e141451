// ABOUTME: Documentation server binary for the Todo Task Manager API
// ABOUTME: Serves api-docs.html and swagger.yaml locally with CORS headers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Usage:
//! ```bash
//! # Serve the current directory on port 8080 and open the browser
//! serve-docs
//!
//! # Another port and directory, no browser
//! serve-docs --port 9000 --directory docs --no-browser
//! ```

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use todo_devtools::cli::{render_error, ServeDocsArgs, DOCS_HINT_MARKER};
use todo_devtools::docs_server;
use todo_devtools::errors::AppError;
use todo_devtools::logging::LoggingConfig;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let args = ServeDocsArgs::parse();

    if let Err(e) = LoggingConfig::from_env("serve-docs")
        .with_verbose(args.verbose)
        .init()
    {
        eprintln!("⚠️  {e}");
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "documentation server failed");
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: ServeDocsArgs) -> Result<()> {
    let config = args.into_config()?;
    docs_server::run(config).await?;
    Ok(())
}

fn report_error(error: &anyhow::Error) {
    match error.downcast_ref::<AppError>() {
        Some(e) => eprintln!("{}", render_error(e, DOCS_HINT_MARKER)),
        None => eprintln!("❌ Error: {error}"),
    }
}
