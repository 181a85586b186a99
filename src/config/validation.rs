//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, interval shorter than timeout)
//! - Check the endpoint is an http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LookupConfig → Result<(), Vec<ValidationError>>
//! - Runs on file config and again after CLI overrides

use thiserror::Error;
use url::Url;

use crate::config::schema::LookupConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("endpoint.base_url must not be empty")]
    EmptyBaseUrl,

    #[error("endpoint.base_url '{0}' is not an http(s) URL")]
    InvalidBaseUrl(String),

    #[error("timeouts.request_ms must be greater than zero")]
    ZeroTimeout,

    #[error("progress.interval_ms must be greater than zero")]
    ZeroInterval,

    #[error("progress.interval_ms ({interval_ms}) must be shorter than timeouts.request_ms ({timeout_ms})")]
    IntervalExceedsTimeout { interval_ms: u64, timeout_ms: u64 },

    #[error("format.indent may only contain whitespace")]
    InvalidIndent,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a configuration, collecting every problem.
pub fn validate_config(config: &LookupConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let base = config.endpoint.base_url.trim();
    if base.is_empty() {
        errors.push(ValidationError::EmptyBaseUrl);
    } else {
        match Url::parse(base) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => errors.push(ValidationError::InvalidBaseUrl(base.to_string())),
        }
    }

    if config.timeouts.request_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.progress.interval_ms == 0 {
        errors.push(ValidationError::ZeroInterval);
    } else if config.timeouts.request_ms > 0
        && config.progress.interval_ms >= config.timeouts.request_ms
    {
        errors.push(ValidationError::IntervalExceedsTimeout {
            interval_ms: config.progress.interval_ms,
            timeout_ms: config.timeouts.request_ms,
        });
    }

    if !config.format.indent.chars().all(char::is_whitespace) {
        errors.push(ValidationError::InvalidIndent);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
