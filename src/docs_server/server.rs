// ABOUTME: Documentation server lifecycle: bind, startup banner, browser launch, shutdown
// ABOUTME: Maps bind failures to operator-facing errors and stops cleanly on Ctrl+C or SIGTERM
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{browser, build_router};
use crate::config::environment::DocsServerConfig;
use crate::constants::docs::{DOCS_PAGE, SWAGGER_FILE};
use crate::errors::{AppError, AppResult, ErrorCode};
use axum::Router;
use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, warn};

const RULE: &str = "============================================================";

/// Serve the documentation directory until Ctrl+C or SIGTERM
///
/// # Errors
///
/// - `ConfigMissing` if the directory does not exist
/// - `PortInUse` if the port is taken
/// - `ConfigError` for any other bind or serve failure
pub async fn run(config: DocsServerConfig) -> AppResult<()> {
    run_with_shutdown(config, shutdown_signal()).await
}

/// Print the banner, bind, open the browser, and serve until `shutdown` resolves
///
/// # Errors
///
/// Same as [`run`]
pub async fn run_with_shutdown<F>(config: DocsServerConfig, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let root = document_root(&config)?;
    let config = DocsServerConfig {
        directory: root.clone(),
        ..config
    };

    println!("🚀 Starting Todo Task Manager API Documentation Server...");
    println!("📚 Documentation will be available at: {}", config.local_url());
    println!("📁 Serving files from: {}", root.display());
    if config.open_browser {
        println!("🌐 Opening documentation in your browser...");
    }
    println!("⏹️  Press Ctrl+C to stop the server");
    println!("{RULE}");

    let listener = bind(&config).await?;
    let page_url = config.docs_page_url();

    println!("✅ Server started successfully!");
    println!("📖 Documentation: {page_url}");
    println!("📄 Swagger YAML: {}/{SWAGGER_FILE}", config.local_url());

    if config.open_browser {
        if let Err(e) = browser::open(&page_url) {
            warn!(url = %page_url, error = %e, "could not open browser");
        }
    }

    serve(listener, build_router(&config), shutdown).await?;

    println!("\n🛑 Server stopped by user");
    Ok(())
}

/// Bind the configured address
///
/// # Errors
///
/// Returns `PortInUse` when the address is taken, `ConfigError` otherwise
pub async fn bind(config: &DocsServerConfig) -> AppResult<TcpListener> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        if e.kind() == ErrorKind::AddrInUse {
            AppError::port_in_use(config.port).with_source(e)
        } else {
            AppError::new(ErrorCode::ConfigError, format!("Error starting server: {e}"))
                .with_source(e)
        }
    })?;

    info!(%address, page = DOCS_PAGE, "documentation server listening");
    Ok(listener)
}

/// Run `router` on `listener` until `shutdown` resolves
///
/// # Errors
///
/// Returns `ConfigError` if the accept loop fails
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::config(format!("Error starting server: {e}")).with_source(e))
}

/// Resolve when the process receives Ctrl+C or, on unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

fn document_root(config: &DocsServerConfig) -> AppResult<PathBuf> {
    let root = config.directory.canonicalize().map_err(|e| {
        AppError::config_missing(format!(
            "Directory {} does not exist",
            config.directory.display()
        ))
        .with_source(e)
    })?;
    if !root.is_dir() {
        return Err(AppError::config_invalid(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    Ok(root)
}
