//! Terminal implementations of the UI capabilities.
//!
//! Used by the `inbound-submit` binary. Writers and readers are generic so the
//! same types can be driven from in-memory buffers. The alert stops reading at
//! the end of the acknowledgement line; given `io::Stdin` it reads through the
//! process-wide stdin buffer the prompts also use, so no typed input is lost.

use super::{Alerter, FormFields, StatusDisplay};
use std::io::{ErrorKind, Read, Write};
use std::sync::{Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Field values captured from prompts.
#[derive(Debug, Default)]
pub struct TerminalForm {
    phone: Mutex<String>,
    message: Mutex<String>,
}

impl TerminalForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_phone(&self, value: impl Into<String>) {
        *lock(&self.phone) = value.into();
    }

    pub fn set_message(&self, value: impl Into<String>) {
        *lock(&self.message) = value.into();
    }
}

impl FormFields for TerminalForm {
    fn phone(&self) -> String {
        lock(&self.phone).clone()
    }

    fn message(&self) -> String {
        lock(&self.message).clone()
    }
}

/// Status line written to a terminal stream.
///
/// Every update is printed on its own line; the latest text is also kept
/// so it can be read back.
pub struct TerminalStatus<W: Write + Send> {
    out: Mutex<W>,
    current: Mutex<String>,
}

impl<W: Write + Send> TerminalStatus<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            current: Mutex::new(String::new()),
        }
    }

    /// The text most recently written.
    pub fn current(&self) -> String {
        lock(&self.current).clone()
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> StatusDisplay for TerminalStatus<W> {
    fn set_text(&self, text: &str) {
        *lock(&self.current) = text.to_string();

        let mut out = lock(&self.out);
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write status text: {}", e);
        }
    }
}

/// Alert that prints its message and waits for Enter.
pub struct TerminalAlert<R: Read + Send, W: Write + Send> {
    io: Mutex<(R, W)>,
}

impl<R: Read + Send, W: Write + Send> TerminalAlert<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            io: Mutex::new((input, out)),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        self.io
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<R: Read + Send, W: Write + Send> Alerter for TerminalAlert<R, W> {
    fn alert(&self, message: &str) {
        let mut io = lock(&self.io);
        let (input, out) = &mut *io;

        if let Err(e) = write!(out, "[!] {} [Enter]", message).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write alert: {}", e);
            return;
        }

        // Consume exactly one line; EOF counts as acknowledgement
        let mut byte = [0u8; 1];
        loop {
            match input.read(&mut byte) {
                Ok(0) => break,
                Ok(_) if byte[0] == b'\n' => break,
                Ok(_) => continue,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!("Failed to read alert acknowledgement: {}", e);
                    break;
                }
            }
        }
        let _ = writeln!(out);
    }
}
