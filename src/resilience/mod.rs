//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Lookup request:
//!     → timeouts.rs (spawn the call, race it against the deadline)
//!     → result, or Timeout + cancellation of the in-flight call
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - No retries: one request per invocation

pub mod timeouts;

pub use timeouts::{race_deadline, Deadline};
