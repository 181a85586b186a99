//! Progress display subsystem.
//!
//! # Data Flow
//! ```text
//! resilience::timeouts (progress tick)
//!     → LoadingFrames (".  " → ".. " → "..." → wrap)
//!     → ProgressReporter (terminal, silent, or recorded)
//! ```

pub mod indicator;

pub use indicator::{LoadingFrames, ProgressReporter, SilentProgress, TerminalProgress, FRAMES};
