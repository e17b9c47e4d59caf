use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use penny_pilot_api::config::{AppConfig, SuggestionConfig};
use penny_pilot_api::routes;
use penny_pilot_api::services::activity_suggestion_service::ActivitySuggestionGenerator;

pub struct TestApp {
    pub config: AppConfig,
    pub suggestion_config: SuggestionConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default().without_latency(),
            suggestion_config: SuggestionConfig::default(),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(ActivitySuggestionGenerator::new(
                self.suggestion_config.clone(),
            )))
            .app_data(routes::json_config())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}

pub const RECEIPT_BOUNDARY: &str = "penny-pilot-boundary";

/// A multipart body carrying a fake receipt image under the `receipt` field
pub fn receipt_upload_body() -> String {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"receipt\"; filename=\"receipt.jpg\"\r\n\
         Content-Type: image/jpeg\r\n\r\nnot-really-a-jpeg\r\n--{b}--\r\n",
        b = RECEIPT_BOUNDARY
    )
}
