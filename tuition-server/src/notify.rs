//! Best-effort email notices for new enrollments
//!
//! Configuration comes entirely from environment variables, read once
//! at boot. A missing configuration disables notices; a failed send is
//! logged and dropped. Neither outcome ever reaches the HTTP caller.

use std::time::Duration;

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::models::Enrollment;

/// Fallback when SMTP_PORT does not parse: the standard submission port.
const DEFAULT_SUBMISSION_PORT: u16 = 587;

/// Bound on connecting to the relay.
const SMTP_TIMEOUT: Duration = Duration::from_secs(15);

/// SMTP relay configuration, loaded from the environment.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub to: String,
}

impl MailerConfig {
    /// Read SMTP settings from the environment.
    ///
    /// Environment variables:
    ///   SMTP_HOST, SMTP_PORT, SMTP_USER, SMTP_PASS,
    ///   EMAIL_FROM (default: SMTP_USER), EMAIL_TO (default: SMTP_USER)
    ///
    /// Returns `None` unless host, port, user, password, and a resolved
    /// recipient are all present.
    pub fn from_env() -> Option<Self> {
        let host = env_nonempty("SMTP_HOST")?;
        let port = env_nonempty("SMTP_PORT")?;
        let user = env_nonempty("SMTP_USER")?;
        let pass = env_nonempty("SMTP_PASS")?;
        let from = env_nonempty("EMAIL_FROM").unwrap_or_else(|| user.clone());
        let to = env_nonempty("EMAIL_TO").unwrap_or_else(|| user.clone());

        Some(Self {
            host,
            port: parse_port(&port),
            user,
            pass,
            from,
            to,
        })
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_port(raw: &str) -> u16 {
    raw.parse().unwrap_or(DEFAULT_SUBMISSION_PORT)
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Send an enrollment notice, absorbing every failure.
///
/// Spawned off the response path by the create handler; the enrollment
/// is already committed when this runs.
pub async fn notify_enrollment(config: Option<MailerConfig>, enrollment: Enrollment) {
    let Some(config) = config else {
        tracing::info!("Email not configured, skipping enrollment notice");
        return;
    };

    match send_notice(&config, &enrollment).await {
        Ok(()) => {
            tracing::info!(enrollment_id = enrollment.id, "Enrollment notice sent");
        }
        Err(e) => {
            tracing::warn!(
                enrollment_id = enrollment.id,
                "Enrollment notice failed: {e}"
            );
        }
    }
}

async fn send_notice(config: &MailerConfig, enrollment: &Enrollment) -> Result<(), NotifyError> {
    let message = Message::builder()
        .from(config.from.parse::<Mailbox>()?)
        .to(config.to.parse::<Mailbox>()?)
        .subject(format!(
            "New tuition enrollment: {}",
            enrollment.student_name
        ))
        .body(render_body(enrollment))?;

    let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        .port(config.port)
        .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
        .timeout(Some(SMTP_TIMEOUT))
        .build();

    transport.send(message).await?;
    Ok(())
}

/// Deterministic rendering of every enrollment field; absent optionals
/// show as `-`.
fn render_body(enrollment: &Enrollment) -> String {
    let board = enrollment.board.as_deref().unwrap_or("-");
    let preferred_time = enrollment.preferred_time.as_deref().unwrap_or("-");

    format!(
        "You have a new tuition enrollment request:\n\
         \n\
         Student Name  : {}\n\
         Class         : {}\n\
         Board         : {}\n\
         Subjects      : {}\n\
         Area          : {}\n\
         Phone         : {}\n\
         Preferred Time: {}\n\
         \n\
         This email was sent by your tuition portal automatically.\n",
        enrollment.student_name,
        enrollment.student_class,
        board,
        enrollment.subjects,
        enrollment.area,
        enrollment.phone,
        preferred_time,
    )
}
