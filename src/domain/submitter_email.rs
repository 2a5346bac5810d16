/// The reply destination supplied by the submitter.
///
/// Only emptiness is rejected here. Strict address grammar is the email
/// provider's job; a rejected envelope comes back as a delivery-time error.
#[derive(Debug, Clone)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    pub fn parse(s: String) -> Result<SubmitterEmail, String> {
        if s.trim().is_empty() {
            Err("submitter email is missing".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmitterEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
