use once_cell::sync::Lazy;
use secrecy::Secret;
use std::net::TcpListener;
use wiremock::MockServer;

use ayo_contact::configuration::{get_configuration, Settings};
use ayo_contact::startup::{build_mail_sender, run};
use ayo_contact::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/send-email", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_urlencoded(&self, body: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/send-email", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_health(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}/health", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn valid_contact_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane",
        "email": "jane@x.com",
        "service": "Branding",
        "budget": "$500",
        "timeline": "2 weeks",
        "message": "Hello\nWorld"
    })
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_without_email_credentials() -> TestApp {
    spawn_app_with(|config| config.email_client.authorization_token = None).await
}

async fn spawn_app_with(customize: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read config file");
    config.email_client.base_url = email_server.uri();
    config.email_client.authorization_token = Some(Secret::new("test-token".to_string()));
    config.contact.business_email = Some("owner@ayocreativedesigns.com".to_string());
    customize(&mut config);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // We retrieve the port assigned to us by the OS
    let port = listener.local_addr().unwrap().port();

    let mail_sender =
        build_mail_sender(&config.email_client).expect("Failed to build mail sender");

    let server = run(
        listener,
        mail_sender,
        config.contact,
        config.application.static_dir,
    )
    .expect("Failed to bind address");
    let _ = tokio::spawn(server);
    // We return the application address to the caller!
    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        email_server,
    }
}
