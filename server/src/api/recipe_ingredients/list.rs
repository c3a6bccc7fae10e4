use super::RecipeIngredientResponse;
use crate::api::{ApiError, ErrorResponse};
use crate::models::RecipeIngredientRow;
use crate::schema::recipe_ingredients;
use crate::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;
use kitem_core::model::RecipeIngredient;

#[utoipa::path(
    get,
    path = "/api/receita_ingredientes/",
    tag = "receita_ingredientes",
    responses(
        (status = 200, description = "All recipe ingredients", body = Vec<RecipeIngredientResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_recipe_ingredients(
    State(pool): State<AppState>,
) -> Result<Json<Vec<RecipeIngredientResponse>>, ApiError> {
    let mut conn = pool.get()?;
    let rows: Vec<RecipeIngredientRow> = recipe_ingredients::table
        .select(RecipeIngredientRow::as_select())
        .order(recipe_ingredients::id.asc())
        .load(&mut conn)?;
    Ok(Json(
        rows.into_iter()
            .map(|row| RecipeIngredient::from(row).into())
            .collect(),
    ))
}
