use inbound_submit::ui::{Alerter, FormFields, StatusDisplay};
use std::sync::{Arc, Mutex};

/// Form whose field values can be changed between activations.
#[derive(Clone, Default)]
pub struct MockForm {
    phone: Arc<Mutex<String>>,
    message: Arc<Mutex<String>>,
}

impl MockForm {
    pub fn new(phone: &str, message: &str) -> Self {
        let form = Self::default();
        form.fill(phone, message);
        form
    }

    pub fn fill(&self, phone: &str, message: &str) {
        *self.phone.lock().unwrap() = phone.to_string();
        *self.message.lock().unwrap() = message.to_string();
    }
}

impl FormFields for MockForm {
    fn phone(&self) -> String {
        self.phone.lock().unwrap().clone()
    }

    fn message(&self) -> String {
        self.message.lock().unwrap().clone()
    }
}

/// Status display recording every write.
#[derive(Clone, Default)]
pub struct MockStatus {
    history: Arc<Mutex<Vec<String>>>,
}

impl MockStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap().clone()
    }

    /// Current text; empty if never written.
    pub fn current(&self) -> String {
        self.history.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

impl StatusDisplay for MockStatus {
    fn set_text(&self, text: &str) {
        self.history.lock().unwrap().push(text.to_string());
    }
}

/// Alerter recording every alert.
#[derive(Clone, Default)]
pub struct MockAlerter {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl MockAlerter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Alerter for MockAlerter {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
