use async_trait::async_trait;

/// A fully composed message, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Message build failed: {0}")]
    Build(String),
    #[error("Transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Single delivery attempt. No retries.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}
