//! MessageText value object.

use super::errors::ValidationError;
use super::trim_field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A trimmed, non-empty message body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageText(String);

impl MessageText {
    /// Create a new MessageText from raw field input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyMessage` if the input is empty or whitespace only.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        let trimmed = trim_field(&text);

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for MessageText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MessageText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MessageText::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
