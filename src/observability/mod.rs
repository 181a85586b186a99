//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (request prepared, dispatched, status, timeout)
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//! ```

pub mod logging;

pub use logging::init_logging;
