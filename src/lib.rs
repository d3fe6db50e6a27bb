//! Embedded application host for the Ytify desktop shell.
//!
//! Serves the application's UI to the native window from a fixed loopback
//! port: the live development bundler in development, the built bundle with
//! a single-page fallback in production. Every response the host emits
//! carries the same hardened security-header set.

pub mod config;
pub mod content;
pub mod host;
pub mod lifecycle;
pub mod security;

pub use config::HostConfig;
pub use host::{EmbeddedHost, HostError, HostHandle};
pub use lifecycle::Shutdown;
