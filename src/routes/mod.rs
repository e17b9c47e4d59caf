pub mod health;
pub mod ingredients;
pub mod receipt;
pub mod trip;

use actix_web::{error, web, HttpResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Reject unreadable JSON bodies with the same error shape the handlers use
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Invalid request body: {}",
            err
        )));
        error::InternalError::from_response(err, response).into()
    })
}

/// Mount every route of the service under `cfg`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api")
            .route(
                "/trip/suggest-activities",
                web::post().to(trip::suggest_activities),
            )
            .route("/scan-receipt", web::post().to(receipt::scan_receipt))
            .route("/ingredients", web::post().to(ingredients::extract_ingredients)),
    );
}
