use super::RECIPE_INGREDIENT_NOT_FOUND;
use crate::api::{ApiError, ErrorResponse};
use crate::schema::recipe_ingredients;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;

#[utoipa::path(
    delete,
    path = "/api/receita_ingredientes/{id}/",
    tag = "receita_ingredientes",
    params(("id" = i32, Path, description = "Recipe ingredient ID")),
    responses(
        (status = 204, description = "Removed from the recipe"),
        (status = 404, description = "Recipe ingredient not found", body = ErrorResponse)
    )
)]
pub async fn delete_recipe_ingredient(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    let deleted = diesel::delete(recipe_ingredients::table.find(id)).execute(&mut conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found(RECIPE_INGREDIENT_NOT_FOUND));
    }
    Ok(StatusCode::NO_CONTENT)
}
