use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use penny_pilot_api::config::{AppConfig, SuggestionConfig};
use penny_pilot_api::routes;
use penny_pilot_api::services::activity_suggestion_service::ActivitySuggestionGenerator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let suggestion_config = SuggestionConfig::from_env();
    log::info!("Suggestion settings: {:?}", suggestion_config);

    let config_data = web::Data::new(config.clone());
    let generator = web::Data::new(ActivitySuggestionGenerator::new(suggestion_config));

    log::info!(
        "Starting HTTP server on {}:{} ({})",
        config.host,
        config.port,
        config.environment
    );

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(config_data.clone())
            .app_data(generator.clone())
            .app_data(routes::json_config())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
