pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::models::Ingredient;
use crate::AppState;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

pub const INGREDIENT_NOT_FOUND: &str = "Ingrediente não encontrado.";

#[derive(Debug, Serialize, ToSchema)]
pub struct IngredientResponse {
    pub id: i32,
    pub nome: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            nome: ingredient.name,
        }
    }
}

/// Body of both create and update.
#[derive(Debug, Clone, Deserialize, ToSchema, Default)]
pub struct IngredientRequest {
    pub nome: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/ingredientes/",
            get(list::list_ingredients).post(create::create_ingredient),
        )
        .route(
            "/api/ingredientes/{id}/",
            get(get::get_ingredient)
                .put(update::update_ingredient)
                .patch(update::update_ingredient)
                .delete(delete::delete_ingredient),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_ingredients,
        create::create_ingredient,
        get::get_ingredient,
        update::update_ingredient,
        delete::delete_ingredient,
    ),
    components(schemas(IngredientResponse, IngredientRequest))
)]
pub struct ApiDoc;
