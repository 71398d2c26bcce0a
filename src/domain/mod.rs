//! Domain value objects.
//!
//! The two form fields are wrapped in value objects that trim their input and
//! refuse to hold an empty string, so a submission can only be built from
//! values that passed validation.

pub mod errors;
pub mod message;
pub mod phone;

pub use errors::ValidationError;
pub use message::MessageText;
pub use phone::PhoneNumber;

/// Trim a raw field value the way browser form scripts do.
///
/// Strips Unicode whitespace plus the byte order mark (U+FEFF), which
/// `str::trim` keeps.
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
