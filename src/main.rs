//! Ytify desktop shell entry point.
//!
//! Startup order is strict: the embedded host must be listening before any
//! window is pointed at it, and a host that fails to start aborts the whole
//! application. A window against a dead host is a worse failure mode than
//! refusing to open one.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ytify_shell::config::HostConfig;
use ytify_shell::host::EmbeddedHost;
use ytify_shell::lifecycle::signals;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ytify_shell=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HostConfig::from_env();

    tracing::info!(
        mode = %config.mode,
        port = config.port,
        static_root = %config.static_root.display(),
        "Configuration loaded"
    );

    let handle = match EmbeddedHost::new(config).start().await {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!(error = %e, "Embedded host failed to start, aborting");
            return ExitCode::FAILURE;
        }
    };

    // The window layer takes over here in the packaged shell. It must only
    // load the origin once start has resolved.
    let origin = format!("http://{}", handle.addr());
    tracing::info!(origin = %origin, "Host ready for window creation");

    signals::quit_signal().await;

    handle.stop().await;

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
