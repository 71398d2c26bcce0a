use async_trait::async_trait;
use inbound_submit::client::AsyncInboundClient;
use inbound_submit::error::{InboundError, InboundResult};
use inbound_submit::models::{InboundRequest, InboundResponse};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// A scripted reply for the mock client.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Parsed JSON body
    Body(Value),
    /// Error whose message is the given text
    Error(String),
}

/// Mock inbound client replaying scripted replies in order.
#[derive(Clone, Default)]
pub struct MockInboundClient {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<InboundRequest>>>,
}

impl MockInboundClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_with(&self, reply: MockReply) -> &Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn reply_body(&self, body: Value) -> &Self {
        self.reply_with(MockReply::Body(body))
    }

    pub fn reply_error(&self, message: &str) -> &Self {
        self.reply_with(MockReply::Error(message.to_string()))
    }

    pub fn requests(&self) -> Vec<InboundRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AsyncInboundClient for MockInboundClient {
    async fn send_inbound(&self, request: &InboundRequest) -> InboundResult<InboundResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left");

        match reply {
            MockReply::Body(body) => InboundResponse::from_value(body),
            MockReply::Error(message) => Err(InboundError::Other(message)),
        }
    }
}

/// Mock client whose replies are released by the test, keyed by message text.
#[derive(Clone, Default)]
pub struct GatedInboundClient {
    gates: Arc<Mutex<HashMap<String, oneshot::Receiver<InboundResult<InboundResponse>>>>>,
    requests: Arc<Mutex<Vec<InboundRequest>>>,
}

impl GatedInboundClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gate for the submission carrying `text`.
    pub fn arm(&self, text: &str) -> oneshot::Sender<InboundResult<InboundResponse>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(text.to_string(), rx);
        tx
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AsyncInboundClient for GatedInboundClient {
    async fn send_inbound(&self, request: &InboundRequest) -> InboundResult<InboundResponse> {
        let gate = self
            .gates
            .lock()
            .unwrap()
            .remove(request.text.as_str())
            .expect("no gate armed for this message");
        self.requests.lock().unwrap().push(request.clone());

        gate.await
            .map_err(|_| InboundError::Other("gate dropped".to_string()))?
    }
}
