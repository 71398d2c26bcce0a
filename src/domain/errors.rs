//! Domain validation errors.

use std::fmt;

/// Errors that can occur during form field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone field is empty after trimming.
    EmptyPhone,

    /// The message field is empty after trimming.
    EmptyMessage,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPhone => write!(f, "Phone number cannot be empty"),
            Self::EmptyMessage => write!(f, "Message text cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
