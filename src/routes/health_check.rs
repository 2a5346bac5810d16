use actix_web::{web, HttpResponse};

use crate::email_client::MailSender;

/// Liveness probe. Also reports whether the mail credential is present so a
/// misconfigured deployment is visible without submitting the form.
pub async fn health_check(mail_sender: web::Data<dyn MailSender>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "email_configured": mail_sender.is_configured(),
    }))
}
