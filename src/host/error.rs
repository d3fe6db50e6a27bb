//! Startup error taxonomy for the embedded host.

use std::net::SocketAddr;

use crate::content::dev::UpstreamInitError;

/// Errors that abort host startup. Both variants are fatal to the
/// application: the shell refuses to open a window against a host that did
/// not come up.
#[derive(Debug)]
pub enum HostError {
    /// The fixed port could not be bound.
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    /// The development bundler integration failed to initialize.
    UpstreamInit(UpstreamInitError),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::Bind { addr, source } => {
                write!(f, "Failed to bind {}: {}", addr, source)
            }
            HostError::UpstreamInit(e) => {
                write!(f, "Development upstream failed to initialize: {}", e)
            }
        }
    }
}

impl std::error::Error for HostError {}

impl From<UpstreamInitError> for HostError {
    fn from(e: UpstreamInitError) -> Self {
        HostError::UpstreamInit(e)
    }
}
