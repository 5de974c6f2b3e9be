//! Static file serving module
//!
//! Resolves request paths under the public root and serves the file bytes.
//! No conditional requests, ranges or server-side caching.

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

const INDEX_FILE: &str = "index.html";

/// Normalize a request path into a path relative to the public root.
///
/// Drops the query string and `.`/empty segments and resolves `..` against
/// the segments seen so far. Returns `None` when the path would climb above
/// the root or contains a segment that cannot name a file under it.
pub fn resolve_asset_path(request_path: &str) -> Option<PathBuf> {
    let path = request_path.split('?').next().unwrap_or_default();

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            s if s.contains(['\0', '\\']) => return None,
            s => segments.push(s),
        }
    }

    if segments.is_empty() {
        return Some(PathBuf::from(INDEX_FILE));
    }
    Some(segments.iter().collect())
}

/// Serve a file from the public root
pub async fn serve_static(state: &AppState, request_path: &str) -> Response<Full<Bytes>> {
    let Some(relative) = resolve_asset_path(request_path) else {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return http::build_404_response();
    };

    match load_asset(&state.public_dir, &relative).await {
        Some((content, content_type)) => http::build_file_response(content, content_type),
        None => http::build_404_response(),
    }
}

/// Read `relative` under `root`, refusing anything that escapes it via symlinks
async fn load_asset(root: &Path, relative: &Path) -> Option<(Vec<u8>, &'static str)> {
    let root_canonical = match fs::canonicalize(root).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Public directory not found or inaccessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    // File not found is common (404), no need to log at warning level
    let file_path = fs::canonicalize(root.join(relative)).await.ok()?;
    if !file_path.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            relative.display(),
            file_path.display()
        ));
        return None;
    }

    if !fs::metadata(&file_path).await.ok()?.is_file() {
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}
