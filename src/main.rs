use std::net::TcpListener;

use ayo_contact::configuration::get_configuration;
use ayo_contact::startup::{build_mail_sender, run};
use ayo_contact::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("ayo-contact".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().expect("Failed to read config file");

    // Environment diagnostics: report what is present, never the values.
    tracing::info!(
        email_credential_present = config.email_client.authorization_token.is_some(),
        business_email_override = config.contact.business_email.is_some(),
        static_dir = %config.application.static_dir,
        "Configuration loaded"
    );

    let address = format!(
        "{address}:{port}",
        address = config.application.host,
        port = config.application.port
    );
    let listener = TcpListener::bind(address)?;
    let mail_sender = build_mail_sender(&config.email_client)?;

    run(
        listener,
        mail_sender,
        config.contact,
        config.application.static_dir,
    )?
    .await?;
    Ok(())
}
