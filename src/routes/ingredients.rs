use actix_web::{web, HttpResponse, Responder};

use crate::models::recipe::{IngredientsRequest, IngredientsResponse};
use crate::services::ingredient_service::mock_extract;

/*
    /api/ingredients
*/
pub async fn extract_ingredients(input: web::Json<IngredientsRequest>) -> impl Responder {
    let ingredients = mock_extract(&input.recipe_instructions, &mut rand::thread_rng());
    HttpResponse::Ok().json(IngredientsResponse { ingredients })
}
