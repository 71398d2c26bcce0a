//! Async wrapper around synchronous InboundClient.
//!
//! This module provides an async interface to the synchronous InboundClient by using
//! `tokio::task::spawn_blocking` to run the HTTP call on a dedicated thread pool,
//! so the await in the submit handler never blocks the runtime.

use crate::client::InboundClient;
use crate::error::{InboundError, InboundResult};
use crate::models::{InboundRequest, InboundResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Async capability for sending a submission.
///
/// The submit handler only depends on this trait, so tests can swap in
/// a scripted implementation.
#[async_trait]
pub trait AsyncInboundClient: Send + Sync {
    async fn send_inbound(&self, request: &InboundRequest) -> InboundResult<InboundResponse>;
}

/// Async wrapper around synchronous InboundClient.
#[derive(Clone)]
pub struct AsyncInboundClientImpl {
    client: Arc<InboundClient>,
}

impl AsyncInboundClientImpl {
    pub fn new(client: InboundClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Access the wrapped synchronous client.
    pub fn inner(&self) -> &InboundClient {
        &self.client
    }
}

#[async_trait]
impl AsyncInboundClient for AsyncInboundClientImpl {
    async fn send_inbound(&self, request: &InboundRequest) -> InboundResult<InboundResponse> {
        let client = self.client.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.send_inbound(&request))
            .await
            .map_err(|e| InboundError::Other(format!("Task join error: {}", e)))?
    }
}
