//! Wire types for the `/inbound` endpoint.

use crate::domain::{MessageText, PhoneNumber, ValidationError};
use crate::error::{InboundError, InboundResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body posted to the inbound endpoint.
///
/// Serializes as `{"from": "<phone>", "text": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundRequest {
    /// Sender phone number
    pub from: PhoneNumber,

    /// Message text
    pub text: MessageText,
}

impl InboundRequest {
    pub fn new(from: PhoneNumber, text: MessageText) -> Self {
        Self { from, text }
    }

    /// Build a request from raw field values, trimming and validating both.
    ///
    /// The phone field is checked first.
    pub fn from_fields(phone: &str, message: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            from: PhoneNumber::new(phone)?,
            text: MessageText::new(message)?,
        })
    }
}

/// Parsed reply from the inbound endpoint.
///
/// Only the `ok` key is inspected; anything else in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundResponse {
    #[serde(default)]
    pub ok: Value,
}

impl InboundResponse {
    /// Build a response from an arbitrary parsed JSON body.
    ///
    /// Objects yield their `ok` key (missing reads as `null`). Scalars and
    /// arrays have no `ok` key and read as `null` too. A bare `null` body
    /// cannot be read from at all and is an error.
    pub fn from_value(body: Value) -> InboundResult<Self> {
        match body {
            Value::Null => Err(InboundError::NullResponse),
            Value::Object(mut map) => Ok(Self {
                ok: map.remove("ok").unwrap_or(Value::Null),
            }),
            _ => Ok(Self { ok: Value::Null }),
        }
    }

    /// Parse a raw response body.
    pub fn from_body(body: &str) -> InboundResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// Whether the server accepted the submission.
    pub fn is_ok(&self) -> bool {
        is_truthy(&self.ok)
    }
}

/// Loose truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy; every other value is truthy,
/// including empty arrays and objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
