//! One-shot name lookup.
//!
//! # Responsibilities
//! - Own the HTTP client and the validated configuration
//! - Wire request construction, execution and the deadline race together
//! - Format the payload and measure wall-clock time for the report

use std::time::{Duration, Instant};

use reqwest::Client;
use tokio_util::sync::CancellationToken;

use crate::config::LookupConfig;
use crate::format::format_json;
use crate::http::{build_request, execute, FetchError, FetchResult};
use crate::progress::ProgressReporter;
use crate::resilience::{race_deadline, Deadline};

/// Outcome of a successful lookup.
#[derive(Debug, Clone)]
pub struct LookupReport {
    /// Raw response body.
    pub body: Vec<u8>,
    /// Pretty-printed body; empty when the body was not JSON.
    pub formatted: String,
    /// Wall-clock time from start to formatted output.
    pub elapsed: Duration,
}

/// Client for the name lookup endpoint.
pub struct LookupClient {
    client: Client,
    config: LookupConfig,
}

impl LookupClient {
    /// Create a client from a validated configuration.
    pub fn new(config: LookupConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(config.endpoint.user_agent.clone())
            .build()
            .map_err(FetchError::Request)?;

        Ok(Self { client, config })
    }

    /// Fetch the raw payload for `name`, bounded by the configured timeout.
    pub async fn fetch(
        &self,
        name: &str,
        progress: &mut dyn ProgressReporter,
    ) -> FetchResult<Vec<u8>> {
        let deadline = Deadline::after(self.config.timeouts.request());
        let request = build_request(&self.client, &self.config.endpoint.base_url, name)?;

        let cancel = CancellationToken::new();
        let client = self.client.clone();
        let token = cancel.clone();
        let work = async move { execute(&client, request, &token).await };

        race_deadline(
            work,
            deadline,
            self.config.progress.interval(),
            &cancel,
            progress,
        )
        .await
    }

    /// Fetch and pretty-print the payload for `name`.
    pub async fn run(
        &self,
        name: &str,
        progress: &mut dyn ProgressReporter,
    ) -> FetchResult<LookupReport> {
        let start = Instant::now();

        let body = self.fetch(name, progress).await?;
        let formatted = format_json(&body, &self.config.format.indent);

        let elapsed = start.elapsed();
        tracing::info!(
            name = %name,
            bytes = body.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Lookup complete"
        );

        Ok(LookupReport {
            body,
            formatted,
            elapsed,
        })
    }
}

impl std::fmt::Debug for LookupClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupClient")
            .field("base_url", &self.config.endpoint.base_url)
            .field("timeout_ms", &self.config.timeouts.request_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SilentProgress;

    #[tokio::test]
    async fn test_malformed_base_url_fails_without_io() {
        let mut config = LookupConfig::default();
        config.endpoint.base_url = "::not a url".to_string();
        let client = LookupClient::new(config).unwrap();

        let err = client.fetch("sam", &mut SilentProgress).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_debug_hides_client() {
        let client = LookupClient::new(LookupConfig::default()).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("api.genderize.io"));
        assert!(debug.contains("5000"));
    }
}
