#![allow(dead_code, unused_imports)]

pub mod mock_inbound_client;
pub mod mock_ui;
pub mod raw_server;

pub use mock_inbound_client::{GatedInboundClient, MockInboundClient};
pub use mock_ui::{MockAlerter, MockForm, MockStatus};
pub use raw_server::RawServer;
