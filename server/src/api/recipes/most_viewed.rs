use super::{into_responses, RecipeResponse};
use crate::api::{ApiError, ErrorResponse};
use crate::models::RecipeRow;
use crate::schema::recipes;
use crate::store::into_recipes;
use crate::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;

#[utoipa::path(
    get,
    path = "/api/receitas/mais-acessadas/",
    tag = "receitas",
    responses(
        (status = 200, description = "Recipes by descending view count", body = Vec<RecipeResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn most_viewed_recipes(
    State(pool): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let mut conn = pool.get()?;
    let rows: Vec<RecipeRow> = recipes::table
        .select(RecipeRow::as_select())
        .order((recipes::view_count.desc(), recipes::id.asc()))
        .load(&mut conn)?;
    Ok(Json(into_responses(into_recipes(rows)?)))
}
