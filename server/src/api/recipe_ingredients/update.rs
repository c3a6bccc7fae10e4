use super::{RecipeIngredientRequest, RecipeIngredientResponse, RECIPE_INGREDIENT_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::{RecipeIngredientRow, RecipeIngredientValues};
use crate::schema::recipe_ingredients;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::guard::DUPLICATE_RECIPE_INGREDIENT;
use kitem_core::model::RecipeIngredient;
use kitem_core::validate::{self, UNIT};

#[utoipa::path(
    put,
    path = "/api/receita_ingredientes/{id}/",
    tag = "receita_ingredientes",
    params(("id" = i32, Path, description = "Recipe ingredient ID")),
    request_body = RecipeIngredientRequest,
    responses(
        (status = 200, description = "Recipe ingredient updated", body = RecipeIngredientResponse),
        (status = 400, description = "Invalid field or duplicate pair", body = ErrorResponse),
        (status = 404, description = "Recipe ingredient not found", body = ErrorResponse)
    )
)]
pub async fn update_recipe_ingredient(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<RecipeIngredientRequest>,
) -> Result<Json<RecipeIngredientResponse>, ApiError> {
    let mut conn = pool.get()?;
    let current = recipe_ingredients::table
        .find(id)
        .select(RecipeIngredientRow::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found(RECIPE_INGREDIENT_NOT_FOUND))?;

    let quantity = match request.quantidade {
        Some(quantity) => validate::quantity(quantity)?,
        None => current.quantity,
    };
    let unit = match request.unidade_medida {
        Some(unit) => UNIT.check(Some(unit))?,
        None => current.unit,
    };
    let values = RecipeIngredientValues {
        recipe_id: request.id_receita.unwrap_or(current.recipe_id),
        ingredient_id: request.id_ingrediente.unwrap_or(current.ingredient_id),
        quantity,
        unit: &unit,
    };

    let row = diesel::update(recipe_ingredients::table.find(id))
        .set(&values)
        .returning(RecipeIngredientRow::as_returning())
        .get_result(&mut conn)
        .map_err(|e| ApiError::from(e).duplicate_as(DUPLICATE_RECIPE_INGREDIENT))?;
    Ok(Json(RecipeIngredient::from(row).into()))
}
