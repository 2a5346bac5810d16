pub mod outbound_message;
pub mod submission;
pub mod submitter_email;
pub mod submitter_name;

pub use outbound_message::OutboundMessage;
pub use submission::Submission;
pub use submitter_email::SubmitterEmail;
pub use submitter_name::SubmitterName;
