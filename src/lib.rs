//! Timeout-bounded name lookup client library.

pub mod config;
pub mod format;
pub mod http;
pub mod lookup;
pub mod observability;
pub mod progress;
pub mod resilience;

pub use config::LookupConfig;
pub use http::{FetchError, FetchResult};
pub use lookup::{LookupClient, LookupReport};
