use super::IngredientResponse;
use crate::api::{ApiError, ErrorResponse};
use crate::models::Ingredient;
use crate::schema::ingredients;
use crate::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;

#[utoipa::path(
    get,
    path = "/api/ingredientes/",
    tag = "ingredientes",
    responses(
        (status = 200, description = "All ingredients ordered by name", body = Vec<IngredientResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_ingredients(
    State(pool): State<AppState>,
) -> Result<Json<Vec<IngredientResponse>>, ApiError> {
    let mut conn = pool.get()?;
    let rows: Vec<Ingredient> = ingredients::table
        .select(Ingredient::as_select())
        .order((ingredients::name.asc(), ingredients::id.asc()))
        .load(&mut conn)?;
    Ok(Json(rows.into_iter().map(IngredientResponse::from).collect()))
}
