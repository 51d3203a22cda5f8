use std::sync::Arc;

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use selvam_core::mailer::{MailError, Mailer, OutgoingEmail};
use selvam_shared::mask_email;
use tracing::{info, warn};

use crate::app_config::SmtpConfig;

/// STARTTLS relay, e.g. Gmail on port 587 with an app password.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let username = config.username.clone().unwrap_or_default();
        let password = config.password.clone().unwrap_or_default();

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(username, password))
            .build();

        Ok(Self { transport })
    }
}

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress(format!("{}: {}", mask_email(address), e)))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let message = Message::builder()
            .from(mailbox(&email.from)?)
            .to(mailbox(&email.to)?)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        info!("Email sent successfully to {}", mask_email(&email.to));
        Ok(())
    }
}

/// Development stand-in used when SMTP credentials are absent. Logs and reports success.
#[derive(Debug, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        warn!("SMTP credentials not configured. Email not sent.");
        info!(
            to = %mask_email(&email.to),
            subject = %email.subject,
            "Enquiry email skipped"
        );
        Ok(())
    }
}

pub fn build_mailer(config: &SmtpConfig) -> Result<Arc<dyn Mailer>, MailError> {
    if config.has_credentials() {
        Ok(Arc::new(SmtpMailer::new(config)?))
    } else {
        Ok(Arc::new(LogMailer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::Config;

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            from: "shop@gmail.com".to_string(),
            to: to.to_string(),
            subject: "New Enquiry from A - Shri Selvam Tiles".to_string(),
            html_body: "<p>hi</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_log_mailer_succeeds() {
        assert!(LogMailer.send(&email("info@shriselvamtiles.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_credentials_selects_log_mailer() {
        let smtp = Config::from_defaults().unwrap().smtp;
        let mailer = build_mailer(&smtp).unwrap();
        assert!(mailer.send(&email("info@shriselvamtiles.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_smtp_mailer_rejects_bad_address_before_connecting() {
        let mut smtp = Config::from_defaults().unwrap().smtp;
        smtp.username = Some("shop@gmail.com".to_string());
        smtp.password = Some("secret".to_string());
        let mailer = SmtpMailer::new(&smtp).unwrap();

        let result = mailer.send(&email("not an address")).await;
        assert!(matches!(result, Err(MailError::InvalidAddress(_))));
    }
}
