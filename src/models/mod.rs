//! Data models for the inbound endpoint.
//!
//! This module contains the request body posted by the submit handler and the
//! reply it interprets.

pub mod inbound;

pub use inbound::{is_truthy, InboundRequest, InboundResponse};
