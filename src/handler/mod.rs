//! Submit handler bound to the form's activation event.
//!
//! One activation reads both fields, validates them, posts them to the inbound
//! endpoint and writes a localized outcome into the status display. Activations
//! are independent: nothing guards against a second one while a request is in
//! flight, and whichever response resolves last decides the final status text.

use crate::client::AsyncInboundClient;
use crate::models::InboundRequest;
use crate::ui::messages;
use crate::ui::{Alerter, FormFields, StatusDisplay};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a single activation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was empty; the alert was shown and nothing was sent.
    Invalid,
    /// The endpoint answered with a truthy `ok`.
    Accepted,
    /// The endpoint answered with a falsy `ok`.
    Rejected,
    /// The request or JSON parse failed; carries the error message.
    Failed(String),
}

/// Handles activations of the submit control.
///
/// Cheap to clone; clones share the same UI and client references.
#[derive(Clone)]
pub struct SubmitHandler {
    fields: Arc<dyn FormFields>,
    status: Arc<dyn StatusDisplay>,
    alerter: Arc<dyn Alerter>,
    client: Arc<dyn AsyncInboundClient>,
}

impl SubmitHandler {
    pub fn new(
        fields: Arc<dyn FormFields>,
        status: Arc<dyn StatusDisplay>,
        alerter: Arc<dyn Alerter>,
        client: Arc<dyn AsyncInboundClient>,
    ) -> Self {
        Self {
            fields,
            status,
            alerter,
            client,
        }
    }

    /// Entry point for the activation event. Produces no value for the caller.
    pub async fn on_activate(&self) {
        let outcome = self.submit().await;
        debug!("Activation finished: {:?}", outcome);
    }

    /// Run one activation and report how it ended.
    pub async fn submit(&self) -> SubmitOutcome {
        let phone = self.fields.phone();
        let message = self.fields.message();

        let request = match InboundRequest::from_fields(&phone, &message) {
            Ok(request) => request,
            Err(e) => {
                warn!("Submission blocked: {}", e);
                self.alerter.alert(messages::VALIDATION_ALERT);
                return SubmitOutcome::Invalid;
            }
        };

        self.status.set_text(messages::SENDING);
        debug!("Sending submission from {}", request.from);

        match self.client.send_inbound(&request).await {
            Ok(response) if response.is_ok() => {
                info!("Submission from {} accepted", request.from);
                self.status.set_text(messages::SENT);
                SubmitOutcome::Accepted
            }
            Ok(response) => {
                info!(
                    "Submission from {} rejected (ok = {})",
                    request.from, response.ok
                );
                self.status.set_text(messages::SEND_FAILED);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                warn!("Submission from {} failed: {}", request.from, e);
                self.status.set_text(&messages::error_status(&e));
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}
