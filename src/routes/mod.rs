pub use send_email::error_chain_fmt;

pub mod health_check;
pub mod send_email;

pub use health_check::health_check;
pub use send_email::send_email;
