use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, Server, ServiceRequest, ServiceResponse};
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::{ContactSettings, EmailClientSettings};
use crate::email_client::{EmailClient, MailSender, UnconfiguredMailSender};
use crate::routes;

/// Build the mail capability from configuration. A missing credential yields
/// the unconfigured stand-in rather than a startup failure, so the site keeps
/// serving and `/health` reports the gap.
pub fn build_mail_sender(
    settings: &EmailClientSettings,
) -> Result<Arc<dyn MailSender>, anyhow::Error> {
    match settings.authorization_token.clone() {
        Some(token) => {
            let sender = settings
                .sender()
                .map_err(|e| anyhow::anyhow!("Invalid sender email in configuration: {}", e))?;
            Ok(Arc::new(EmailClient::new(
                settings.base_url.clone(),
                sender,
                token,
                settings.timeout(),
            )))
        }
        None => Ok(Arc::new(UnconfiguredMailSender)),
    }
}

pub fn run(
    listener: TcpListener,
    mail_sender: Arc<dyn MailSender>,
    contact: ContactSettings,
    static_dir: String,
) -> Result<Server, std::io::Error> {
    let mail_sender: Data<dyn MailSender> = Data::from(mail_sender);
    let contact = Data::new(contact);
    let static_dir = PathBuf::from(static_dir);
    let server = HttpServer::new(move || {
        let landing_page = static_dir.join("index.html");
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(routes::health_check))
            .route("/send-email", web::post().to(routes::send_email))
            // Static site last, with the landing page as catch-all for
            // anything the routes above did not claim.
            .service(
                Files::new("/", &static_dir)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let landing_page = landing_page.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(&landing_page).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
            .app_data(mail_sender.clone())
            .app_data(contact.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
