//! OS signal handling for the standalone shell binary.
//!
//! The packaged shell receives its shutdown triggers from the window layer.
//! Running standalone, Ctrl+C and SIGTERM stand in for "application
//! quitting".

/// Wait for a quit signal from the operating system.
pub async fn quit_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
