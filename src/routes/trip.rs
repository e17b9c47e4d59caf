use actix_web::{web, HttpResponse, Responder};

use crate::config::AppConfig;
use crate::models::trip::{ActivityRequest, ActivityResponse};
use crate::routes::ErrorResponse;
use crate::services::activity_suggestion_service::{ActivitySuggestionGenerator, SuggestionError};

/*
    /api/trip/suggest-activities
*/
pub async fn suggest_activities(
    config: web::Data<AppConfig>,
    generator: web::Data<ActivitySuggestionGenerator>,
    input: web::Json<ActivityRequest>,
) -> impl Responder {
    let request = input.into_inner();
    let result = generator.generate(&request, &mut rand::thread_rng());

    match result {
        Ok(events) => {
            log::info!(
                "Suggested {} activities for {} starting {}",
                events.len(),
                request.destination,
                request.start_date
            );
            if !config.suggestion_latency.is_zero() {
                tokio::time::sleep(config.suggestion_latency).await;
            }
            HttpResponse::Ok().json(ActivityResponse { events })
        }
        Err(SuggestionError::InvalidInput(msg)) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(msg))
        }
        Err(err) => {
            log::error!("Error in trip suggestion API: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to process request"))
        }
    }
}
