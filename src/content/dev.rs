//! Development-mode routing: delegate every request to the live bundler.
//!
//! The integration is initialized once at router construction. The upstream
//! address is parsed and probed, so a bundler that is not running fails
//! `start` instead of producing a window full of 502s. Request handling
//! rewrites the URI authority and forwards in-process; no bundler process
//! is spawned or managed here.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::body::Body;
use axum::http::uri::{Authority, Scheme};
use axum::http::{Request, Uri};
use axum::response::{IntoResponse, Response};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use thiserror::Error;
use tokio::net::TcpStream;

use super::ServingError;

/// How long the startup probe waits for the bundler to accept.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Errors raised while initializing the bundler integration. Fatal at
/// startup: the host refuses to come up half-working.
#[derive(Debug, Error)]
pub enum UpstreamInitError {
    #[error("invalid upstream address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("bundler not reachable at {address}: {reason}")]
    Unreachable { address: String, reason: String },
}

/// Router forwarding every request to the development bundler.
#[derive(Debug)]
pub struct DevelopmentRouter {
    client: Client<HttpConnector, Body>,
    authority: Authority,
}

impl DevelopmentRouter {
    /// Initialize the integration against the fixed upstream address.
    pub async fn connect(upstream: &str) -> Result<Self, UpstreamInitError> {
        let addr =
            SocketAddr::from_str(upstream).map_err(|e| UpstreamInitError::InvalidAddress {
                address: upstream.to_string(),
                reason: e.to_string(),
            })?;

        let authority =
            Authority::from_str(upstream).map_err(|e| UpstreamInitError::InvalidAddress {
                address: upstream.to_string(),
                reason: e.to_string(),
            })?;

        // One-shot reachability probe, so a dead bundler surfaces at start
        // rather than on the first request.
        match tokio::time::timeout(PROBE_TIMEOUT, TcpStream::connect(addr)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                return Err(UpstreamInitError::Unreachable {
                    address: upstream.to_string(),
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                return Err(UpstreamInitError::Unreachable {
                    address: upstream.to_string(),
                    reason: format!("connect timed out after {:?}", PROBE_TIMEOUT),
                });
            }
        }

        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        tracing::info!(upstream = %upstream, "Development bundler integration ready");

        Ok(Self { client, authority })
    }

    /// Forward one request to the bundler, streaming the response back.
    pub async fn forward(&self, request: Request<Body>) -> Response {
        let (mut parts, body) = request.into_parts();

        let mut uri_parts = parts.uri.clone().into_parts();
        uri_parts.scheme = Some(Scheme::HTTP);
        uri_parts.authority = Some(self.authority.clone());
        parts.uri = match Uri::from_parts(uri_parts) {
            Ok(uri) => uri,
            Err(e) => return ServingError::Upstream(e.to_string()).into_response(),
        };

        match self.client.request(Request::from_parts(parts, body)).await {
            Ok(response) => {
                let (parts, body) = response.into_parts();
                Response::from_parts(parts, Body::new(body))
            }
            Err(e) => {
                tracing::error!(error = %e, "Bundler request failed");
                ServingError::Upstream(e.to_string()).into_response()
            }
        }
    }
}
