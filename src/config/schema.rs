//! Configuration schema definitions.
//!
//! The schema derives Serde traits like every other config type in the
//! project, but it is built from the process environment exactly once at
//! startup; there is no config file and no reload.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Port the embedded host always binds. The native window loads
/// `http://127.0.0.1:5173`; changing this constant requires changing the
/// window-creation call site in lockstep.
pub const HOST_PORT: u16 = 5173;

/// Content strategy selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Forward every request to the live development bundler.
    Development,
    /// Serve the built bundle from the static root.
    Production,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}

/// Host configuration. Immutable once a host instance has started.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HostConfig {
    /// Content strategy (development or production).
    pub mode: Mode,

    /// Port to bind on loopback. Fixed contract; see [`HOST_PORT`].
    pub port: u16,

    /// Directory holding the built bundle (production mode).
    pub static_root: PathBuf,

    /// Address of the live development bundler (development mode).
    pub dev_upstream: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Production,
            port: HOST_PORT,
            static_root: PathBuf::from("dist"),
            dev_upstream: "127.0.0.1:5174".to_string(),
        }
    }
}

impl HostConfig {
    /// Build the configuration from the process environment.
    ///
    /// `YTIFY_MODE=development` selects the development strategy; any other
    /// value (or none) selects production. `YTIFY_DIST_DIR` and
    /// `YTIFY_DEV_UPSTREAM` override the asset locations at deploy time.
    /// The port is not configurable per run.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(mode) = std::env::var("YTIFY_MODE") {
            if mode.eq_ignore_ascii_case("development") {
                config.mode = Mode::Development;
            }
        }
        if let Ok(root) = std::env::var("YTIFY_DIST_DIR") {
            config.static_root = PathBuf::from(root);
        }
        if let Ok(upstream) = std::env::var("YTIFY_DEV_UPSTREAM") {
            config.dev_upstream = upstream;
        }

        config
    }

    /// Loopback address the listener binds. The host is never exposed on
    /// external interfaces.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), self.port)
    }
}
