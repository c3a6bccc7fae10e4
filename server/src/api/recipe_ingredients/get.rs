use super::{RecipeIngredientResponse, RECIPE_INGREDIENT_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::RecipeIngredientRow;
use crate::schema::recipe_ingredients;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::model::RecipeIngredient;

#[utoipa::path(
    get,
    path = "/api/receita_ingredientes/{id}/",
    tag = "receita_ingredientes",
    params(("id" = i32, Path, description = "Recipe ingredient ID")),
    responses(
        (status = 200, description = "Recipe ingredient", body = RecipeIngredientResponse),
        (status = 404, description = "Recipe ingredient not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe_ingredient(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RecipeIngredientResponse>, ApiError> {
    let mut conn = pool.get()?;
    let row = recipe_ingredients::table
        .find(id)
        .select(RecipeIngredientRow::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found(RECIPE_INGREDIENT_NOT_FOUND))?;
    Ok(Json(RecipeIngredient::from(row).into()))
}
