//! Email dispatch.
//!
//! Reports go out over an authenticated STARTTLS SMTP session. Credentials
//! come from the environment; when they are missing or the send fails the
//! caller is told to fall back to a local report file.

use std::env;

use anyhow::{Context, Result};
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub sender_email: String,
    pub sender_password: String,
    pub sender_name: String,
}

impl EmailConfig {
    /// Read the SMTP configuration from the environment. Returns None when
    /// sender credentials are not configured, which callers treat as "save
    /// the report to a file instead".
    pub fn from_env() -> Option<Self> {
        let sender_email = env::var("SENDER_EMAIL").ok()?;
        let sender_password = env::var("SENDER_PASSWORD").ok()?;
        if sender_email.is_empty() || sender_password.is_empty() {
            return None;
        }

        Some(Self {
            smtp_server: env::var("SMTP_SERVER").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            sender_email,
            sender_password,
            sender_name: env::var("SENDER_NAME").unwrap_or_else(|_| "Listing Scout".to_string()),
        })
    }
}

/// Send a multipart (plain + HTML) report. Any failure is returned to the
/// caller; nothing here aborts the run.
pub fn send_report(
    config: &EmailConfig,
    recipient: &str,
    subject: &str,
    html_body: String,
    text_body: String,
) -> Result<()> {
    let from: Mailbox = format!("{} <{}>", config.sender_name, config.sender_email)
        .parse()
        .with_context(|| format!("Invalid sender address {:?}", config.sender_email))?;
    let to: Mailbox = recipient
        .parse()
        .with_context(|| format!("Invalid recipient address {:?}", recipient))?;

    let email = Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(text_body),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_body),
                ),
        )
        .context("Failed to build email message")?;

    let mailer = SmtpTransport::starttls_relay(&config.smtp_server)
        .with_context(|| format!("Invalid SMTP server {:?}", config.smtp_server))?
        .port(config.smtp_port)
        .credentials(Credentials::new(
            config.sender_email.clone(),
            config.sender_password.clone(),
        ))
        .build();

    mailer.send(&email).context("SMTP send failed")?;
    Ok(())
}
