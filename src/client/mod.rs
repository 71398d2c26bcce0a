//! HTTP client for the inbound endpoint.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client posts a submission and interprets the
//! reply the way a browser `fetch` would: a non-2xx status is not an error by itself,
//! the body is parsed and its `ok` key decides the outcome.

mod async_wrapper;
pub use async_wrapper::{AsyncInboundClient, AsyncInboundClientImpl};

use crate::config::Config;
use crate::error::{InboundError, InboundResult};
use crate::metrics::Metrics;
use crate::models::{InboundRequest, InboundResponse};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Fixed path submissions are posted to.
pub const INBOUND_PATH: &str = "/inbound";

/// HTTP client for the inbound endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct InboundClient {
    /// Base URL the inbound path is joined onto
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl InboundClient {
    /// Create a new InboundClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(config.base_url.clone(), config.timeout())
    }

    /// Create an InboundClient with a custom base URL and no timeout (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::build(base_url, None)
    }

    fn build(base_url: String, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            base_url,
            agent: Arc::new(builder.build()),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with a JSON body.
    ///
    /// Status errors hand back their response so the caller can still read the body.
    fn post(&self, path: &str, body: &serde_json::Value) -> InboundResult<ureq::Response> {
        let url = self.build_url(path);
        let start = Instant::now();

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body);

        match result {
            Ok(response) => {
                tracing::debug!("POST {} - status {}", url, response.status());
                self.metrics.record_request(start.elapsed(), false);
                Ok(response)
            }
            Err(ureq::Error::Status(code, response)) => {
                tracing::debug!("POST {} - status {}, reading body anyway", url, code);
                self.metrics.record_request(start.elapsed(), false);
                Ok(response)
            }
            Err(ureq::Error::Transport(transport)) => {
                tracing::error!("POST {} - transport error: {}", url, transport);
                self.metrics.record_request(start.elapsed(), true);
                Err(map_transport(transport))
            }
        }
    }

    /// Post a submission to the inbound endpoint and parse the reply.
    pub fn send_inbound(&self, request: &InboundRequest) -> InboundResult<InboundResponse> {
        let body = serde_json::to_value(request)?;
        let response = self.post(INBOUND_PATH, &body)?;

        let text = response
            .into_string()
            .map_err(|e| InboundError::BodyError(e.to_string()))?;

        let parsed = InboundResponse::from_body(&text).inspect_err(|_| {
            self.metrics.record_unreadable_reply();
        })?;

        self.metrics.record_submission(parsed.is_ok());
        Ok(parsed)
    }
}

/// Map a ureq transport error to an InboundError.
///
/// Only an I/O error that actually timed out becomes `Timeout`; resets and
/// early closes keep their own message.
fn map_transport(transport: ureq::Transport) -> InboundError {
    match transport.kind() {
        ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Dns => {
            InboundError::ConnectionFailed(transport.to_string())
        }
        ureq::ErrorKind::Io if is_timeout(&transport) => InboundError::Timeout,
        _ => InboundError::HttpError(transport.to_string()),
    }
}

/// Whether any `io::Error` in the source chain is a timeout.
fn is_timeout(error: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = error.source();
    while let Some(err) = source {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if matches!(
                io_err.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
            ) {
                return true;
            }
        }
        source = err.source();
    }
    false
}
