//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, or defaults)
//!     → CLI overrides (binary only)
//!     → validation.rs (semantic checks)
//!     → LookupConfig (validated, passed by reference into the lookup)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Durations are named millisecond fields, converted at the edge
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{
    EndpointConfig, FormatConfig, LookupConfig, ObservabilityConfig, ProgressConfig,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
