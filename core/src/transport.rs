//! Executes `HttpRequest` values against the network.
//!
//! `PokemonClient` only ever talks to a `Transport`, so tests can swap in a
//! canned one and the real client can be pointed at any server.

use std::time::Duration;

use tracing::warn;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Performs one GET round trip.
///
/// Implementations return non-2xx statuses as data. Only failures to obtain
/// a response at all (connect, DNS, timeout, truncated body) are errors, and
/// those must be `ApiError::UpstreamUnavailable`.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a shared `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// `timeout` bounds the whole call, connect through body read.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(&request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(|e| {
            warn!(url = %request.url, error = %e, "request failed");
            ApiError::UpstreamUnavailable(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.body_mut().read_to_string().map_err(|e| {
            warn!(url = %request.url, status, error = %e, "failed to read response body");
            ApiError::UpstreamUnavailable(e.to_string())
        })?;

        Ok(HttpResponse { status, headers, body })
    }
}
