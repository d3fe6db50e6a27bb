//! Shared utilities for integration testing the embedded host.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use ytify_shell::config::{HostConfig, Mode};

/// The exact header contract every response must carry.
pub const EXPECTED_CSP: &str = "default-src 'self'; script-src 'self' 'unsafe-inline' 'unsafe-eval'; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; font-src 'self' data: https:; connect-src 'self' https: ws: wss:; media-src 'self' https:; object-src 'none'; child-src 'none'; frame-src 'none'; base-uri 'self'; form-action 'self'; frame-ancestors 'none';";

/// Assert the full security header set, textually exact.
pub fn assert_security_headers(headers: &reqwest::header::HeaderMap) {
    assert_eq!(
        headers
            .get("content-security-policy")
            .and_then(|v| v.to_str().ok()),
        Some(EXPECTED_CSP)
    );
    assert_eq!(
        headers
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );
    assert_eq!(
        headers.get("x-frame-options").and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
    assert_eq!(
        headers
            .get("x-xss-protection")
            .and_then(|v| v.to_str().ok()),
        Some("1; mode=block")
    );
    assert_eq!(
        headers.get("referrer-policy").and_then(|v| v.to_str().ok()),
        Some("no-referrer")
    );
}

/// Non-pooled client that ignores any ambient proxy configuration.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Production config bound to a test-local port.
#[allow(dead_code)]
pub fn production_config(port: u16, static_root: &Path) -> HostConfig {
    HostConfig {
        mode: Mode::Production,
        port,
        static_root: static_root.to_path_buf(),
        ..HostConfig::default()
    }
}

/// Development config bound to a test-local port.
#[allow(dead_code)]
pub fn development_config(port: u16, upstream: &str) -> HostConfig {
    HostConfig {
        mode: Mode::Development,
        port,
        dev_upstream: upstream.to_string(),
        ..HostConfig::default()
    }
}

/// Bundle fixture: a `dist/` root holding the entry document and one asset,
/// plus a file outside the root that must stay unreachable.
#[allow(dead_code)]
pub struct BundleFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl BundleFixture {
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("dist")
    }
}

#[allow(dead_code)]
pub fn bundle_fixture() -> BundleFixture {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("dist");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(root.join("index.html"), "<html>ytify</html>").unwrap();
    std::fs::write(root.join("app.js"), "console.log('ytify');").unwrap();
    std::fs::write(dir.path().join("secret.txt"), "top secret").unwrap();
    BundleFixture { dir }
}

/// Issue a raw GET so the request path reaches the host unnormalized.
#[allow(dead_code)]
pub async fn raw_get(addr: SocketAddr, path: &str) -> String {
    let mut socket = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    socket.write_all(request.as_bytes()).await.unwrap();

    let mut buf = Vec::new();
    socket.read_to_end(&mut buf).await.unwrap();
    String::from_utf8_lossy(&buf).into_owned()
}

/// Mock bundler answering every request with a fixed body.
#[allow(dead_code)]
pub async fn start_mock_bundler(addr: SocketAddr, response: &'static str) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let response_str = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            response.len(),
                            response
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Listener that accepts and immediately drops connections: the startup
/// probe succeeds but every exchange afterwards fails.
#[allow(dead_code)]
pub async fn start_black_hole(addr: SocketAddr) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => drop(socket),
                Err(_) => break,
            }
        }
    });
}
