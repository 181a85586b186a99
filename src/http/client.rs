//! HTTP execution.
//!
//! # Responsibilities
//! - Send a prepared request
//! - Read the full response body into memory
//! - Abort the connection when cancelled
//!
//! # Design Decisions
//! - The response is consumed by the body read, so the connection is
//!   released on every path
//! - Non-success statuses are logged, their body is still returned

use reqwest::{Client, Request};
use tokio_util::sync::CancellationToken;

use crate::http::types::{FetchError, FetchResult};

/// Execute `request` and return the whole response body.
pub async fn execute(
    client: &Client,
    request: Request,
    cancel: &CancellationToken,
) -> FetchResult<Vec<u8>> {
    let url = request.url().clone();
    tracing::debug!(url = %url, "Dispatching lookup request");

    let response = tokio::select! {
        _ = cancel.cancelled() => return Err(FetchError::Cancelled),
        res = client.execute(request) => res?,
    };

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = %url, status = %status, "Lookup endpoint returned non-success status");
    }

    let body = tokio::select! {
        _ = cancel.cancelled() => return Err(FetchError::Cancelled),
        res = response.bytes() => res?,
    };

    tracing::debug!(url = %url, status = %status, bytes = body.len(), "Lookup response received");
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::build_request;

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = Client::new();
        // Port 1 is reserved and closed on test hosts.
        let request = build_request(&client, "http://127.0.0.1:1", "sam").unwrap();
        let cancel = CancellationToken::new();

        let err = execute(&client, request, &cancel).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_cancelled_before_send() {
        let client = Client::new();
        let request = build_request(&client, "http://127.0.0.1:1", "sam").unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = execute(&client, request, &cancel).await.unwrap_err();
        assert!(matches!(err, FetchError::Cancelled));
    }
}
