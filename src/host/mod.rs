//! Host lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! shell startup
//!     → EmbeddedHost::new(config)
//!     → start()  (content router → middleware → bind → serve task)
//!     → HostHandle  (the window may now be created)
//!
//! shutdown trigger (all windows closed / application quitting)
//!     → HostHandle::stop()  (drain serve task, release port)
//! ```
//!
//! # Design Decisions
//! - One live handle per port: a second start fails at bind; it never
//!   rebinds and never disturbs the live handle
//! - Startup failures are fatal to the application; there is no fallback
//!   port and no retry

pub mod error;
pub mod server;

pub use error::HostError;
pub use server::{EmbeddedHost, HostHandle};
