//! UI capabilities the submit handler is wired to.
//!
//! The handler never touches a concrete widget. It reads the two fields through
//! [`FormFields`], writes status text through [`StatusDisplay`] and raises the
//! validation alert through [`Alerter`]. References are acquired once at start-up
//! and injected, mirroring element handles grabbed when a page loads.

pub mod messages;
pub mod terminal;

pub use terminal::{TerminalAlert, TerminalForm, TerminalStatus};

/// Read access to the two text inputs.
///
/// Values are read at activation time, untrimmed.
pub trait FormFields: Send + Sync {
    /// Current value of the phone field.
    fn phone(&self) -> String;

    /// Current value of the message field.
    fn message(&self) -> String;
}

/// The single status text element. Each call overwrites the previous text.
pub trait StatusDisplay: Send + Sync {
    fn set_text(&self, text: &str);
}

/// Blocking user-facing alert.
///
/// Implementations return only once the user has acknowledged the message.
pub trait Alerter: Send + Sync {
    fn alert(&self, message: &str);
}
