pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use kitem_core::model::RecipeIngredient;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

pub const RECIPE_INGREDIENT_NOT_FOUND: &str = "ReceitaIngrediente não encontrado.";

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeIngredientResponse {
    pub id: i32,
    pub id_receita: i32,
    pub id_ingrediente: i32,
    pub quantidade: f64,
    pub unidade_medida: String,
}

impl From<RecipeIngredient> for RecipeIngredientResponse {
    fn from(row: RecipeIngredient) -> Self {
        Self {
            id: row.id,
            id_receita: row.recipe_id,
            id_ingrediente: row.ingredient_id,
            quantidade: row.quantity,
            unidade_medida: row.unit,
        }
    }
}

/// Body of create and update.
#[derive(Debug, Clone, Deserialize, ToSchema, Default)]
pub struct RecipeIngredientRequest {
    pub id_receita: Option<i32>,
    pub id_ingrediente: Option<i32>,
    pub quantidade: Option<f64>,
    pub unidade_medida: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/receita_ingredientes/",
            get(list::list_recipe_ingredients).post(create::create_recipe_ingredient),
        )
        .route(
            "/api/receita_ingredientes/{id}/",
            get(get::get_recipe_ingredient)
                .put(update::update_recipe_ingredient)
                .patch(update::update_recipe_ingredient)
                .delete(delete::delete_recipe_ingredient),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipe_ingredients,
        create::create_recipe_ingredient,
        get::get_recipe_ingredient,
        update::update_recipe_ingredient,
        delete::delete_recipe_ingredient,
    ),
    components(schemas(RecipeIngredientResponse, RecipeIngredientRequest))
)]
pub struct ApiDoc;
