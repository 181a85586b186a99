//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! base URL + name
//!     → request.rs (build GET, fail fast on bad URL)
//!     → client.rs (send, read body, honour cancellation)
//!     → Vec<u8> or FetchError
//! ```

pub mod client;
pub mod request;
pub mod types;

pub use client::execute;
pub use request::{build_request, target_url};
pub use types::{FetchError, FetchResult};
