use crate::domain::submitter_email::SubmitterEmail;
use crate::domain::submitter_name::SubmitterName;

/// One validated contact-form submission. Lives for a single request and is
/// never stored.
#[derive(Debug)]
pub struct Submission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub phone: Option<String>,
    pub service: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: String,
}
