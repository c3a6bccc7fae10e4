use super::{IngredientResponse, INGREDIENT_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::Ingredient;
use crate::schema::ingredients;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;

#[utoipa::path(
    get,
    path = "/api/ingredientes/{id}/",
    tag = "ingredientes",
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "Ingredient", body = IngredientResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    )
)]
pub async fn get_ingredient(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<IngredientResponse>, ApiError> {
    let mut conn = pool.get()?;
    let ingredient = ingredients::table
        .find(id)
        .select(Ingredient::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found(INGREDIENT_NOT_FOUND))?;
    Ok(Json(ingredient.into()))
}
