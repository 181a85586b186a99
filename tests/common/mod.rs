//! Shared utilities for integration tests.

use std::time::Duration;

use genderize_fetch::LookupConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SAM_BODY: &str = r#"{"name":"sam","gender":"male","probability":0.97}"#;

/// Start a mock lookup endpoint answering `?name=<name>` with `body` after `delay`.
pub async fn start_mock_endpoint(name: &str, status: u16, body: &str, delay: Duration) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("name", name))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "application/json")
                .set_body_string(body)
                .set_delay(delay),
        )
        .mount(&server)
        .await;

    server
}

/// Config pointing at `server` with the given timeout.
#[allow(dead_code)]
pub fn config_for(server: &MockServer, timeout_ms: u64) -> LookupConfig {
    let mut config = LookupConfig::default();
    config.endpoint.base_url = server.uri();
    config.timeouts.request_ms = timeout_ms;
    config
}
