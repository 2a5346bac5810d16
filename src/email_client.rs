use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::{OutboundMessage, SubmitterEmail};

/// The "send one email" capability consumed by the request handlers.
///
/// Abstracted behind a trait so tests can inject a double and so the
/// unconfigured state has a first-class representation instead of an
/// `Option` threaded through the app.
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Whether a provider credential is present. Handlers check this before
    /// attempting any dispatch; `/health` reports it.
    fn is_configured(&self) -> bool {
        true
    }

    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError>;
}

/// Closed set of dispatch failures. Classification happens on the provider's
/// HTTP status code, never on response-body contents.
#[derive(thiserror::Error, Debug)]
pub enum MailError {
    #[error("mail service not configured")]
    NotConfigured,
    #[error("email authentication failed")]
    Authentication,
    #[error("invalid email address")]
    InvalidRecipient,
    #[error("email service configuration error")]
    ProviderConfiguration,
    #[error("failed to send email")]
    Delivery(#[source] anyhow::Error),
}

pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: SubmitterEmail,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: SubmitterEmail,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl MailSender for EmailClient {
    #[tracing::instrument(
        name = "Dispatching email via provider",
        skip(self, message),
        fields(recipient = %message.recipient, subject = %message.subject)
    )]
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let url = format!("{}/emails", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: &message.recipient,
            subject: &message.subject,
            html: &message.html_body,
        };
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| MailError::Delivery(e.into()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        match status.as_u16() {
            401 | 403 => Err(MailError::Authentication),
            422 => Err(MailError::InvalidRecipient),
            400 => Err(MailError::ProviderConfiguration),
            _ => Err(MailError::Delivery(anyhow::anyhow!(
                "provider returned {}",
                status
            ))),
        }
    }
}

/// Stand-in bound at startup when no provider credential is supplied. The
/// service still runs, serves the site and answers `/health`; dispatch
/// attempts fail before any network call.
pub struct UnconfiguredMailSender;

#[async_trait]
impl MailSender for UnconfiguredMailSender {
    fn is_configured(&self) -> bool {
        false
    }

    async fn send(&self, _message: &OutboundMessage) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }
}
