//! Inbound Submit - a form submit handler for an inbound messaging endpoint.
//!
//! Reads a phone number and a message, validates that both are non-empty after
//! trimming, posts them as JSON to `/inbound` and shows a localized status based
//! on the `ok` key of the reply.
//!
//! # Architecture
//!
//! - **domain**: Trimmed, non-empty value objects for the two fields
//! - **models**: Request and response bodies of the inbound endpoint
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the inbound endpoint, sync and async
//! - **metrics**: Request and submission counters
//! - **ui**: Capabilities the handler is wired to, plus terminal implementations
//! - **handler**: The submit handler itself

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod metrics;
pub mod models;
pub mod ui;

pub use client::{AsyncInboundClient, AsyncInboundClientImpl, InboundClient, INBOUND_PATH};
pub use config::Config;
pub use domain::{MessageText, PhoneNumber, ValidationError};
pub use error::{ConfigError, InboundError, InboundResult};
pub use handler::{SubmitHandler, SubmitOutcome};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{InboundRequest, InboundResponse};
pub use ui::{Alerter, FormFields, StatusDisplay};
