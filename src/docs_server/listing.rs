// ABOUTME: HTML directory listing for folders without an index.html
// ABOUTME: Resolves request paths inside the document root and rejects traversal
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::errors::{AppError, AppResult};
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use http::Uri;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Fallback handler behind the static file service
///
/// Renders a listing when the path is a directory inside the root and answers
/// 404 for everything else.
pub async fn directory_listing(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let request_path = uri.path();
    let Some(path) = resolve_path(&root, request_path) else {
        debug!(path = %request_path, "rejected path outside the document root");
        return AppError::not_found(request_path).into_response();
    };

    if !path.is_dir() {
        return AppError::not_found(request_path).into_response();
    }

    match render_listing(&path, request_path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Map a URL path onto the filesystem under `root`
///
/// Returns `None` for undecodable paths and for any `..` segment.
#[must_use]
pub fn resolve_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(request_path).ok()?;
    let mut resolved = root.to_path_buf();

    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            s if s.contains('\\') || s.contains(':') => return None,
            s => resolved.push(s),
        }
    }
    Some(resolved)
}

/// Render the entries of `dir` as an HTML page titled with `request_path`
///
/// # Errors
///
/// Returns a storage error if the directory cannot be read
pub async fn render_listing(dir: &Path, request_path: &str) -> AppResult<String> {
    let mut entries = Vec::new();
    let mut read_dir = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().await.is_ok_and(|kind| kind.is_dir());
        entries.push((name, is_dir));
    }
    entries.sort_by_key(|(name, _)| name.to_lowercase());

    let display_path = urlencoding::decode(request_path)
        .map_or_else(|_| request_path.to_owned(), |path| path.into_owned());
    let title = html_escape::encode_text(&display_path);

    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>Directory listing for {title}</title>");
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>Directory listing for {title}</h1>\n<hr>\n<ul>");
    for (name, is_dir) in &entries {
        let suffix = if *is_dir { "/" } else { "" };
        let _ = writeln!(
            html,
            "<li><a href=\"{}{suffix}\">{}{suffix}</a></li>",
            urlencoding::encode(name),
            html_escape::encode_text(name),
        );
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Ok(html)
}
