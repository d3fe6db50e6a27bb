//! Content routing subsystem.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → host serve handler
//!     → ContentRouter::serve
//!         Development → dev.rs (forward to the live bundler)
//!         Production  → static_site.rs (exact file match, SPA fallback)
//!     → response (security headers stamped by the outer layer)
//! ```
//!
//! # Design Decisions
//! - The strategy is chosen once at start; request handling never
//!   re-evaluates the mode
//! - Per-request failures become HTTP error responses, never a host crash

pub mod dev;
pub mod static_site;

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::{HostConfig, Mode};
use dev::UpstreamInitError;

/// A single request that could not be satisfied. Never fatal to the host:
/// each variant converts into a plain HTTP error response and the serve
/// loop keeps running.
#[derive(Debug, Error)]
pub enum ServingError {
    /// The entry document could not be read (missing static root included).
    #[error("entry document unavailable at {}: {source}", .path.display())]
    EntryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matched file disappeared or failed to read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The development bundler did not complete the exchange.
    #[error("upstream exchange failed: {0}")]
    Upstream(String),
}

impl ServingError {
    fn status(&self) -> StatusCode {
        match self {
            ServingError::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServingError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Request could not be served");
        (self.status(), self.to_string()).into_response()
    }
}

/// Content strategy selected once per host start.
pub enum ContentRouter {
    Development(dev::DevelopmentRouter),
    Production(static_site::ProductionRouter),
}

impl ContentRouter {
    /// Build the strategy for the configured mode.
    ///
    /// Development-mode upstream initialization happens here, before the
    /// listener binds; its failure aborts startup.
    pub async fn from_config(config: &HostConfig) -> Result<Self, UpstreamInitError> {
        match config.mode {
            Mode::Development => Ok(Self::Development(
                dev::DevelopmentRouter::connect(&config.dev_upstream).await?,
            )),
            Mode::Production => Ok(Self::Production(static_site::ProductionRouter::new(
                config.static_root.clone(),
            ))),
        }
    }

    /// Satisfy one request with the mode's content source.
    pub async fn serve(&self, request: Request<Body>) -> Response {
        match self {
            ContentRouter::Development(bundler) => bundler.forward(request).await,
            ContentRouter::Production(site) => site.serve(request).await,
        }
    }
}
