//! Embedded host lifecycle.
//!
//! # Responsibilities
//! - Assemble the axum application: security headers outermost, then the
//!   content router for the configured mode
//! - Bind the fixed loopback port
//! - Hand out a handle whose `stop` drains the serve task and releases
//!   the port
//!
//! # Design Decisions
//! - Startup is one awaited operation; the window is only created after it
//!   resolves
//! - `stop` is idempotent, so window-close and quit may both call it

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware;
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use crate::content::ContentRouter;
use crate::host::error::HostError;
use crate::lifecycle::Shutdown;
use crate::security::apply_security_headers;

/// Application state injected into the serve handler.
#[derive(Clone)]
struct AppState {
    content: Arc<ContentRouter>,
}

/// The embedded application host, ready to start.
pub struct EmbeddedHost {
    config: HostConfig,
}

impl EmbeddedHost {
    /// Capture the immutable configuration for this host instance.
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }

    /// Start the host: construct the content router, install middleware,
    /// bind the fixed port and begin serving.
    ///
    /// Resolves only once the socket is bound; the shell must not create
    /// the window before then. Fails with [`HostError::UpstreamInit`] when
    /// the development bundler integration cannot initialize, and with
    /// [`HostError::Bind`] when the port is unavailable. A second `start`
    /// while a handle is live fails the same way and leaves the first
    /// handle untouched.
    pub async fn start(self) -> Result<HostHandle, HostError> {
        let content = Arc::new(ContentRouter::from_config(&self.config).await?);

        let app = Router::new()
            .route("/", any(serve_content))
            .route("/{*path}", any(serve_content))
            .with_state(AppState { content })
            .layer(
                ServiceBuilder::new()
                    .layer(middleware::from_fn(apply_security_headers))
                    .layer(TraceLayer::new_for_http()),
            );

        let addr = self.config.bind_address();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| HostError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| HostError::Bind { addr, source })?;

        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        let task = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = rx.recv().await;
            });
            if let Err(e) = serve.await {
                tracing::error!(error = %e, "Embedded host serve loop failed");
            }
        });

        tracing::info!(
            address = %local_addr,
            mode = %self.config.mode,
            "Embedded host listening"
        );

        Ok(HostHandle {
            addr: local_addr,
            shutdown,
            task: Mutex::new(Some(task)),
        })
    }
}

/// A live host instance.
///
/// Cheap to share behind an `Arc`, so each shutdown trigger can hold its
/// own reference. `stop` is the orderly teardown path; dropping the last
/// handle also winds the serve loop down, but then nothing awaits the
/// drain.
#[derive(Debug)]
pub struct HostHandle {
    addr: SocketAddr,
    shutdown: Shutdown,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl HostHandle {
    /// Address the window loads.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop the host and release the port.
    ///
    /// Idempotent: window-close and quit may both end up here, possibly
    /// concurrently. The first caller drains the serve task; later callers
    /// find nothing left to await and return immediately.
    pub async fn stop(&self) {
        self.shutdown.trigger();
        let task = self.task.lock().await.take();
        if let Some(task) = task {
            if let Err(e) = task.await {
                tracing::error!(error = %e, "Serve task did not shut down cleanly");
            }
            tracing::info!(address = %self.addr, "Embedded host stopped");
        }
    }
}

/// Single serve handler; every path funnels into the mode's content router.
async fn serve_content(State(state): State<AppState>, request: Request<Body>) -> Response {
    state.content.serve(request).await
}
