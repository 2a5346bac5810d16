use htmlescape::encode_minimal;

use crate::domain::submission::Submission;

/// One fully-formed email derived from a [`Submission`]. The sender identity
/// is service configuration and lives on the mail client, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
}

impl OutboundMessage {
    /// The notification delivered to the business inbox.
    pub fn owner_notification(submission: &Submission, recipient: &str) -> Self {
        let subject = format!(
            "New Project Inquiry from {}",
            submission.name.as_ref()
        );
        let html_body = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #FF4D00;">New Project Inquiry - Ayo Creative Designs</h2>
  <div style="background: #f5f5f5; padding: 20px; border-radius: 8px;">
    <h3 style="color: #333;">Client Information:</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>Service:</strong> {service}</p>
    <p><strong>Budget:</strong> {budget}</p>
    <p><strong>Timeline:</strong> {timeline}</p>
  </div>
  <div style="background: #f9f9f9; padding: 20px; border-radius: 8px; margin-top: 20px;">
    <h3 style="color: #333;">Project Details:</h3>
    <p>{message}</p>
  </div>
  <p style="color: #666; margin-top: 20px;">Sent from ayocreativedesigns.com contact form</p>
</div>"#,
            name = encode_minimal(submission.name.as_ref()),
            email = encode_minimal(submission.email.as_ref()),
            phone = or_not_provided(&submission.phone),
            service = encode_minimal(&submission.service),
            budget = or_not_provided(&submission.budget),
            timeline = or_not_provided(&submission.timeline),
            message = multiline(&submission.message),
        );
        Self {
            recipient: recipient.to_string(),
            subject,
            html_body,
        }
    }

    /// The auto-reply delivered back to the submitter.
    pub fn auto_reply(submission: &Submission) -> Self {
        let html_body = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; color: #333;">
  <h2 style="color: #FF4D00;">Thank You for Your Inquiry!</h2>
  <p>Dear {name},</p>
  <p>Thank you for reaching out to Ayo Creative Designs. I have received your project inquiry and will get back to you within 24 hours.</p>
  <div style="background: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #FF4D00;">Inquiry Summary:</h3>
    <p><strong>Service:</strong> {service}</p>
    <p><strong>Budget:</strong> {budget}</p>
    <p><strong>Timeline:</strong> {timeline}</p>
  </div>
  <p>Best regards,<br>
  <strong>Ayomide.Q Hassan</strong><br>
  Founder &amp; Creative Director<br>
  Ayo Creative Designs<br>
  <a href="https://ayocreativedesigns.com" style="color: #FF4D00;">ayocreativedesigns.com</a></p>
</div>"#,
            name = encode_minimal(submission.name.as_ref()),
            service = encode_minimal(&submission.service),
            budget = or_not_provided(&submission.budget),
            timeline = or_not_provided(&submission.timeline),
        );
        Self {
            recipient: submission.email.as_ref().to_string(),
            subject: "Thank you for contacting Ayo Creative Designs".to_string(),
            html_body,
        }
    }
}

fn or_not_provided(field: &Option<String>) -> String {
    match field {
        Some(value) => encode_minimal(value),
        None => "Not provided".to_string(),
    }
}

/// Escape first, then turn line breaks into markup. `encode_minimal` leaves
/// `\n` untouched, so the replacement sees every line break in the input.
fn multiline(text: &str) -> String {
    encode_minimal(text).replace('\n', "<br>")
}
