//! Production-mode routing: static files with a single-page fallback.
//!
//! Every path is matched exactly against the static root; anything that is
//! not a file comes back as the entry document so client-side routing keeps
//! working. Filesystem state is re-checked on every request, so a missing
//! bundle heals as soon as it appears on disk.

use std::path::{Component, Path, PathBuf};

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};

use super::ServingError;

/// Name of the single-page entry document inside the static root.
const ENTRY_DOCUMENT: &str = "index.html";

/// Router serving the built bundle from a fixed directory.
pub struct ProductionRouter {
    root: PathBuf,
}

impl ProductionRouter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Satisfy one request from the static root.
    pub async fn serve(&self, request: Request<Body>) -> Response {
        // HEAD shares the GET path; hyper suppresses the body on the wire.
        if request.method() != Method::GET && request.method() != Method::HEAD {
            return StatusCode::METHOD_NOT_ALLOWED.into_response();
        }

        // Paths that cannot map below the root (parent or absolute
        // components) never touch the filesystem; they take the fallback
        // like any other non-file path.
        let Some(relative) = sanitize(request.uri().path()) else {
            return self.entry_document().await;
        };

        if relative.as_os_str().is_empty() {
            return self.entry_document().await;
        }

        let candidate = self.root.join(&relative);
        match tokio::fs::metadata(&candidate).await {
            Ok(meta) if meta.is_file() => match tokio::fs::read(&candidate).await {
                Ok(bytes) => file_response(&candidate, bytes),
                Err(source) => ServingError::Read {
                    path: candidate,
                    source,
                }
                .into_response(),
            },
            // Directories are never listed; they fall back like misses.
            _ => self.entry_document().await,
        }
    }

    /// Serve the entry document (single-page-application fallback).
    async fn entry_document(&self) -> Response {
        let path = self.root.join(ENTRY_DOCUMENT);
        match tokio::fs::read(&path).await {
            Ok(bytes) => html_response(bytes),
            Err(source) => ServingError::EntryUnavailable { path, source }.into_response(),
        }
    }
}

/// Map a request path onto a relative filesystem path, refusing anything
/// that could escape the root.
fn sanitize(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.contains('\0') {
        return None;
    }

    let mut clean = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(clean)
}

/// 200 response for a file that exists under the root.
fn file_response(path: &Path, bytes: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let content_type = HeaderValue::from_str(mime.as_ref())
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    let mut response = (StatusCode::OK, bytes).into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);
    response
}

/// 200 response carrying the entry document.
fn html_response(bytes: Vec<u8>) -> Response {
    let mut response = (StatusCode::OK, bytes).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}
