//! Error types for the inbound submit handler.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation of the form fields lives in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can occur while sending a submission to the inbound endpoint.
///
/// The `Display` text of each variant is what the user sees after the
/// localized error prefix, so messages are kept short.
#[derive(Error, Debug)]
pub enum InboundError {
    /// The request never produced a response (DNS, connect, TLS, I/O).
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Connection to the endpoint could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Network timeout (only when a request timeout is configured)
    #[error("Request timeout")]
    Timeout,

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    BodyError(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The response parsed to JSON `null`, which has no `ok` property
    #[error("Response body is null")]
    NullResponse,

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with InboundError
pub type InboundResult<T> = Result<T, InboundError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
