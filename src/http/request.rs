//! Request construction.
//!
//! # Responsibilities
//! - Build the lookup URL from the configured base and the name
//! - Prepare the GET request before any network I/O happens
//!
//! # Design Decisions
//! - The name is appended as-is; callers own any escaping
//! - URL problems fail here, never inside the background task

use reqwest::{Client, Method, Request};
use url::Url;

use crate::http::types::{FetchError, FetchResult};

/// Build the target URL for a name lookup.
pub fn target_url(base_url: &str, name: &str) -> String {
    format!("{}?name={}", base_url, name)
}

/// Build the GET request for `name` against `base_url`.
pub fn build_request(client: &Client, base_url: &str, name: &str) -> FetchResult<Request> {
    let raw = target_url(base_url, name);
    let url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    let request = client
        .request(Method::GET, url)
        .build()
        .map_err(FetchError::Request)?;

    tracing::debug!(url = %request.url(), "Lookup request prepared");
    Ok(request)
}
