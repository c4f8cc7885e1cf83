//! Contact Relay - command line entry point
//!
//! Reads one JSON event (from `--event` or stdin), runs it through the
//! matching service and prints the `{statusCode, body}` response to stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contact_relay::handler::{
    decode_event, handle_add_contact, handle_send_email, SEND_EMAIL_FAILED,
};
use contact_relay::{
    AsyncResendClient, AsyncResendClientImpl, Config, ContactRequest, ContactServiceImpl,
    EmailRequest, EmailServiceImpl, ResendClient, Response, RetryExecutor,
};
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-relay", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a contact to the configured audience
    AddContact {
        /// Event JSON; read from stdin when omitted
        #[arg(long)]
        event: Option<String>,
    },
    /// Email a contact-form submission to the configured inbox
    SendEmail {
        /// Event JSON; read from stdin when omitted
        #[arg(long)]
        event: Option<String>,
    },
}

async fn read_event(event: Option<String>) -> Result<String> {
    match event {
        Some(raw) => Ok(raw),
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("failed to read event from stdin")?;
            Ok(raw)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout carries the response)
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let client = Arc::new(AsyncResendClientImpl::new(ResendClient::new(&config)))
        as Arc<dyn AsyncResendClient>;

    // Ctrl-C aborts any pending backoff instead of sleeping it out
    let cancel = CancellationToken::new();
    let signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal.cancel();
        }
    });
    let executor = RetryExecutor::new(config.retry_policy()).with_cancellation(cancel);

    let response = match cli.command {
        Command::AddContact { event } => {
            let raw = read_event(event).await?;
            match decode_event::<ContactRequest>(&raw) {
                Ok(event) => {
                    let service = ContactServiceImpl::new(client, executor);
                    handle_add_contact(&service, event, &config.contact_config()).await
                }
                Err(response) => response,
            }
        }
        Command::SendEmail { event } => {
            let raw = read_event(event).await?;
            match decode_event::<EmailRequest>(&raw) {
                Ok(event) => match EmailServiceImpl::new(client, executor) {
                    Ok(service) => {
                        handle_send_email(&service, event, &config.email_config()).await
                    }
                    Err(e) => {
                        error!("Failed to initialize email service: {}", e);
                        Response::from_service_error(&e, SEND_EMAIL_FAILED)
                    }
                },
                Err(response) => response,
            }
        }
    };

    println!("{}", serde_json::to_string(&response)?);

    if !response.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
