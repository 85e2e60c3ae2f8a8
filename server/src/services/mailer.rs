//! Outbound email delivery for the inquiry relay.
//!
//! DESIGN
//! ======
//! Handlers talk to an [`InquiryMailer`] trait object held in `AppState`, so
//! tests swap in a recording mock. The production implementation forwards to
//! the Resend API through `resend-rs`; the API key never leaves the server.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::MailerConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MailError {
    /// The email provider refused the message.
    #[error("{0}")]
    Rejected(String),
    /// The provider could not be reached or answered unintelligibly.
    #[error("{0}")]
    Transport(String),
}

impl From<resend_rs::Error> for MailError {
    fn from(err: resend_rs::Error) -> Self {
        match err {
            resend_rs::Error::Http(_) | resend_rs::Error::Parse(_) => Self::Transport(err.to_string()),
            resend_rs::Error::Resend(_) | resend_rs::Error::RateLimit { .. } => Self::Rejected(err.to_string()),
        }
    }
}

/// A rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub subject: String,
    pub html: String,
    /// Visitor address replies should go to.
    pub reply_to: Option<String>,
}

/// Delivery backend. Enables mocking in tests.
#[async_trait::async_trait]
pub trait InquiryMailer: Send + Sync {
    /// Deliver `email` to the configured recipients.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Rejected`] when the provider does not accept it,
    /// [`MailError::Transport`] when it cannot be reached.
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;

    /// Subject line configured for inquiries.
    fn subject(&self) -> &str;
}

pub struct ResendMailer {
    client: Resend,
    from: String,
    to: Vec<String>,
    subject: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: MailerConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from, to: config.to, subject: config.subject }
    }
}

#[async_trait::async_trait]
impl InquiryMailer for ResendMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let mut options = CreateEmailBaseOptions::new(&self.from, &self.to, &email.subject).with_html(&email.html);
        if let Some(reply_to) = email.reply_to.as_deref() {
            options = options.with_reply(reply_to);
        }
        self.client.emails.send(options).await?;
        tracing::info!(recipients = self.to.len(), "inquiry email accepted");
        Ok(())
    }

    fn subject(&self) -> &str {
        &self.subject
    }
}

#[cfg(test)]
#[path = "mailer_test.rs"]
mod tests;
