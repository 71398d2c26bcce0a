//! PhoneNumber value object.

use super::errors::ValidationError;
use super::trim_field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A trimmed, non-empty phone number as typed into the form.
///
/// No format validation is applied beyond emptiness; the inbound service
/// decides what it accepts.
///
/// # Example
///
/// ```
/// use inbound_submit::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("  +966500000000 ").unwrap();
/// assert_eq!(phone.as_str(), "+966500000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from raw field input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPhone` if the input is empty or whitespace only.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let trimmed = trim_field(&phone);

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPhone);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
