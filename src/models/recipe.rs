use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct IngredientsRequest {
    pub recipe_instructions: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct IngredientsResponse {
    pub ingredients: Vec<String>,
}
