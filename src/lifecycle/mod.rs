//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     HostConfig::from_env → EmbeddedHost::start → window creation
//!
//! Shutdown:
//!     window-close / quit / OS signal → Shutdown::trigger
//!         → serve loop drains → port released
//! ```
//!
//! # Design Decisions
//! - Two independent external triggers map onto one idempotent stop
//! - On macOS the shell keeps the host alive when the last window closes;
//!   the handle is shared (`Arc`) so either policy can hold it

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
