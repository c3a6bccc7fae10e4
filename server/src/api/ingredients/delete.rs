use super::INGREDIENT_NOT_FOUND;
use crate::api::{ApiError, ErrorResponse};
use crate::schema::ingredients;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;

/// Also removes the ingredient from every recipe and shopping list.
#[utoipa::path(
    delete,
    path = "/api/ingredientes/{id}/",
    tag = "ingredientes",
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 204, description = "Ingredient deleted"),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    )
)]
pub async fn delete_ingredient(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    let deleted = diesel::delete(ingredients::table.find(id)).execute(&mut conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found(INGREDIENT_NOT_FOUND));
    }
    Ok(StatusCode::NO_CONTENT)
}
