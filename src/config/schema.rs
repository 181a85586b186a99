//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for a lookup run.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LookupConfig {
    /// Endpoint to query.
    pub endpoint: EndpointConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Progress indicator settings.
    pub progress: ProgressConfig,

    /// Output formatting.
    pub format: FormatConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL; `?name=<name>` is appended verbatim.
    pub base_url: String,

    /// User-Agent header sent with the request.
    pub user_agent: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.genderize.io".to_string(),
            user_agent: concat!("genderize-fetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed for the request, in milliseconds.
    pub request_ms: u64,
}

impl TimeoutConfig {
    pub fn request(&self) -> Duration {
        Duration::from_millis(self.request_ms)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_ms: 5000 }
    }
}

/// Progress indicator configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Draw the waiting animation.
    pub enabled: bool,

    /// Delay between animation frames in milliseconds.
    pub interval_ms: u64,

    /// Text shown before each frame.
    pub label: String,
}

impl ProgressConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 130,
            label: "waiting for response".to_string(),
        }
    }
}

/// Output formatting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Indent step for pretty-printed JSON.
    pub indent: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: crate::format::DEFAULT_INDENT.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
