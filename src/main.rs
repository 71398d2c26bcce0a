//! Inbound Submit - Main entry point
//!
//! Terminal front-end for the submit handler. Prompts for the phone number and
//! the message; entering the message activates the handler. Status text goes to
//! stdout, logs go to stderr.

use anyhow::Result;
use inbound_submit::client::{AsyncInboundClient, AsyncInboundClientImpl};
use inbound_submit::ui::{TerminalAlert, TerminalForm, TerminalStatus};
use inbound_submit::{Config, InboundClient, SubmitHandler};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Print a prompt and read one line. `None` on EOF.
fn prompt(label: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{}: ", label)?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only, stdout carries prompts and status text)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Posting submissions to {}", config.base_url);
    match config.timeout() {
        Some(timeout) => info!("Request timeout: {:?}", timeout),
        None => info!("Request timeout disabled"),
    }

    let client = AsyncInboundClientImpl::new(InboundClient::new(&config));
    let form = Arc::new(TerminalForm::new());
    let handler = SubmitHandler::new(
        form.clone(),
        Arc::new(TerminalStatus::new(io::stdout())),
        Arc::new(TerminalAlert::new(io::stdin(), io::stdout())),
        Arc::new(client.clone()) as Arc<dyn AsyncInboundClient>,
    );

    loop {
        let phone = match prompt("رقم الهاتف") {
            Ok(Some(phone)) => phone,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read phone number: {}", e);
                break;
            }
        };
        let message = match prompt("الرسالة") {
            Ok(Some(message)) => message,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read message: {}", e);
                break;
            }
        };

        form.set_phone(phone);
        form.set_message(message);
        handler.on_activate().await;
    }

    info!("{}", client.inner().metrics().summary());

    Ok(())
}
