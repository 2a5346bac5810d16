use actix_web::http::StatusCode;
use actix_web::web::Either;
use actix_web::{web, HttpResponse, ResponseError};
use std::fmt::Formatter;

use crate::configuration::ContactSettings;
use crate::domain::{OutboundMessage, Submission, SubmitterEmail, SubmitterName};
use crate::email_client::{MailError, MailSender};

/// Raw contact-form payload. Every field is optional at this layer so that a
/// half-filled form reaches our own validation (and our own JSON error shape)
/// instead of being bounced by the extractor.
#[derive(serde::Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    service: Option<String>,
    #[serde(default)]
    budget: Option<String>,
    #[serde(default)]
    timeline: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl TryFrom<ContactForm> for Submission {
    type Error = String;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = SubmitterName::parse(form.name.unwrap_or_default())?;
        let email = SubmitterEmail::parse(form.email.unwrap_or_default())?;
        let service = required(form.service, "service")?;
        let message = required(form.message, "message")?;
        Ok(Self {
            name,
            email,
            phone: optional(form.phone),
            service,
            budget: optional(form.budget),
            timeline: optional(form.timeline),
            message,
        })
    }
}

fn required(field: Option<String>, name: &str) -> Result<String, String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("missing required field `{}`", name)),
    }
}

fn optional(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

#[derive(serde::Serialize)]
struct ApiResponse {
    success: bool,
    message: String,
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Mail(#[from] MailError),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ContactError {
    /// Message surfaced to the form; the full chain stays in the logs.
    fn user_message(&self) -> &'static str {
        match self {
            ContactError::Validation(_) => "Please fill in all required fields",
            ContactError::Mail(MailError::NotConfigured) => {
                "Email service is not configured. Please try again later."
            }
            ContactError::Mail(MailError::Authentication) => {
                "Email authentication failed. Please try again later."
            }
            ContactError::Mail(MailError::InvalidRecipient) => {
                "Invalid email address. Please check it and try again."
            }
            ContactError::Mail(MailError::ProviderConfiguration) => {
                "Email service configuration error. Please try again later."
            }
            ContactError::Mail(MailError::Delivery(_)) | ContactError::Unexpected(_) => {
                "Failed to send email. Please try again."
            }
        }
    }
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactError::Mail(_) | ContactError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse {
            success: false,
            message: self.user_message().to_string(),
        })
    }
}

/// `POST /send-email`
///
/// Validates the submission, then dispatches the owner notification followed
/// by the auto-reply. The two sends are not atomic: if the auto-reply fails
/// the owner has already been notified and the caller still sees a failure.
#[tracing::instrument(
    name = "Handling a contact-form submission",
    skip(body, mail_sender, contact),
    fields(submitter_name = tracing::field::Empty, service = tracing::field::Empty)
)]
pub async fn send_email(
    body: Either<web::Json<ContactForm>, web::Form<ContactForm>>,
    mail_sender: web::Data<dyn MailSender>,
    contact: web::Data<ContactSettings>,
) -> Result<HttpResponse, ContactError> {
    let submission: Submission = body.into_inner().try_into().map_err(ContactError::Validation)?;
    tracing::Span::current()
        .record(
            "submitter_name",
            &tracing::field::display(submission.name.as_ref()),
        )
        .record("service", &tracing::field::display(&submission.service));

    if !mail_sender.is_configured() {
        return Err(MailError::NotConfigured.into());
    }

    let owner_notification =
        OutboundMessage::owner_notification(&submission, contact.business_email());
    mail_sender.send(&owner_notification).await?;

    let auto_reply = OutboundMessage::auto_reply(&submission);
    mail_sender.send(&auto_reply).await?;

    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Email sent successfully! We'll get back to you within 24 hours.".to_string(),
    }))
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
