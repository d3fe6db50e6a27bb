//! Security subsystem: the response-header contract.
//!
//! # Design Decisions
//! - One constant policy for the process lifetime, identical in both modes
//! - Stamped by the outermost layer so no response path can bypass it

pub mod headers;

pub use headers::apply_security_headers;
