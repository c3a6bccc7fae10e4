use super::{RecipeIngredientRequest, RecipeIngredientResponse};
use crate::api::{required, ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use kitem_core::guard;
use kitem_core::model::NewRecipeIngredient;
use kitem_core::validate::{self, UNIT};

#[utoipa::path(
    post,
    path = "/api/receita_ingredientes/",
    tag = "receita_ingredientes",
    request_body = RecipeIngredientRequest,
    responses(
        (status = 201, description = "Ingredient added to the recipe", body = RecipeIngredientResponse),
        (status = 400, description = "Invalid field, unknown reference or ingredient already in the recipe", body = ErrorResponse)
    )
)]
pub async fn create_recipe_ingredient(
    State(pool): State<AppState>,
    Json(request): Json<RecipeIngredientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new = NewRecipeIngredient {
        recipe_id: required("id_receita", request.id_receita)?,
        ingredient_id: required("id_ingrediente", request.id_ingrediente)?,
        quantity: validate::quantity(required("quantidade", request.quantidade)?)?,
        unit: UNIT.check(request.unidade_medida)?,
    };
    let created = guard::add_recipe_ingredient(&PgStore::new(&pool), &new)?;
    Ok((
        StatusCode::CREATED,
        Json(RecipeIngredientResponse::from(created)),
    ))
}
