//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (YTIFY_MODE, YTIFY_DIST_DIR, YTIFY_DEV_UPSTREAM)
//!     → schema.rs (HostConfig::from_env)
//!     → HostConfig (immutable for the host instance's lifetime)
//!     → consumed by EmbeddedHost::start
//! ```
//!
//! # Design Decisions
//! - The port is a contractual constant shared with the window call site
//! - Mode is decided once at startup; there is no runtime switch
//! - All fields have defaults so an empty environment means production

pub mod schema;

pub use schema::HostConfig;
pub use schema::Mode;
pub use schema::HOST_PORT;
