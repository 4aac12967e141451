// ABOUTME: End-to-end tests that run the compiled binaries as child processes
// ABOUTME: Checks exit codes, stdout banners, and the error and hint lines on stderr
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::sample_fixture;
use serde_json::json;
use std::process::{Command, Output};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn loader_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_load-test-data"))
}

fn docs_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_serve-docs"))
}

fn unique_test_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to reserve port");
    listener.local_addr().expect("failed to read port").port()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_missing_fixture_prints_header_error_and_hint() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = dir.path().join("test-data.json");

    let output = loader_bin()
        .args(["--api-url", "http://127.0.0.1:9", "--fixture"])
        .arg(&fixture)
        .output()
        .expect("failed to run load-test-data");

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(
        stdout.starts_with("🚀 Loading test data into Todo Task Manager\n📡 API URL: http://127.0.0.1:9\n"),
        "unexpected stdout: {stdout}"
    );
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains(&format!("❌ Error: {} file not found!", fixture.display())),
        "unexpected stderr: {stderr}"
    );
    assert!(stderr.contains("   Make sure you're running this from the project root directory."));
}

#[tokio::test]
async fn test_login_failure_exits_with_code_one() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "nope"})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let fixture = dir.path().join("test-data.json");
    std::fs::write(&fixture, serde_json::to_string(&sample_fixture(1, 1)).unwrap()).unwrap();

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        loader_bin()
            .args(["--api-url", &uri, "--register-delay-ms", "0", "--task-delay-ms", "0"])
            .arg("--fixture")
            .arg(&fixture)
            .output()
            .expect("failed to run load-test-data")
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("✅ Successfully processed 1/1 users"));
    let stderr = stderr_of(&output);
    assert!(
        stderr.lines().any(|line| line == "❌ Could not login to create tasks"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_serve_docs_missing_directory_exits_with_code_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = docs_bin()
        .args(["--no-browser", "--host", "127.0.0.1", "--port"])
        .arg(unique_test_port().to_string())
        .arg("--directory")
        .arg(dir.path().join("missing"))
        .output()
        .expect("failed to run serve-docs");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("does not exist"));
}

#[test]
fn test_serve_docs_port_in_use_prints_banner_and_hint() {
    let dir = tempfile::tempdir().unwrap();
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let output = docs_bin()
        .args(["--no-browser", "--host", "127.0.0.1", "--port"])
        .arg(port.to_string())
        .arg("--directory")
        .arg(dir.path())
        .output()
        .expect("failed to run serve-docs");
    drop(taken);

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("🚀 Starting Todo Task Manager API Documentation Server..."));
    assert!(stdout.contains(&format!(
        "📚 Documentation will be available at: http://localhost:{port}"
    )));
    assert!(!stdout.contains("✅ Server started successfully!"));

    let stderr = stderr_of(&output);
    assert!(stderr.contains(&format!("❌ Error: Port {port} is already in use!")));
    assert!(stderr.contains("💡 Try using a different port or stop the existing server"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_serve_docs_serves_then_stops_on_sigterm() {
    use std::io::{BufRead, BufReader};
    use std::process::Stdio;
    use std::time::Duration;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("swagger.yaml"), "openapi: 3.0.0\n").unwrap();
    let port = unique_test_port();

    let mut child = docs_bin()
        .args(["--no-browser", "--host", "127.0.0.1", "--port"])
        .arg(port.to_string())
        .arg("--directory")
        .arg(dir.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn serve-docs");

    let stdout = child.stdout.take().unwrap();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let reader = std::thread::spawn(move || {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            let _ = tx.send(line);
        }
    });

    let mut lines = Vec::new();
    while let Ok(Some(line)) = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await {
        let started = line == "✅ Server started successfully!";
        lines.push(line);
        if started {
            break;
        }
    }
    assert!(
        lines.iter().any(|line| line == "✅ Server started successfully!"),
        "server never started: {lines:?}"
    );

    let response = reqwest::get(format!("http://127.0.0.1:{port}/swagger.yaml"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.text().await.unwrap(), "openapi: 3.0.0\n");

    let status = Command::new("kill")
        .args(["-TERM", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let exit = tokio::task::spawn_blocking(move || child.wait().unwrap())
        .await
        .unwrap();
    reader.join().unwrap();
    while let Ok(line) = rx.try_recv() {
        lines.push(line);
    }

    assert!(exit.success(), "unexpected exit: {exit:?}");
    assert!(lines.contains(&format!(
        "📖 Documentation: http://localhost:{port}/api-docs.html"
    )));
    assert!(lines.iter().any(|line| line == "🛑 Server stopped by user"));
}
