use super::{into_responses, RecipeResponse};
use crate::api::{ApiError, ErrorResponse};
use crate::models::RecipeRow;
use crate::raw_sql::random_order;
use crate::schema::recipes;
use crate::store::into_recipes;
use crate::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;

const RANDOM_LIMIT: i64 = 10;

#[utoipa::path(
    get,
    path = "/api/receitas/aleatorias/",
    tag = "receitas",
    responses(
        (status = 200, description = "Up to ten recipes in random order", body = Vec<RecipeResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn random_recipes(
    State(pool): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let mut conn = pool.get()?;
    let rows: Vec<RecipeRow> = recipes::table
        .select(RecipeRow::as_select())
        .order(random_order())
        .limit(RANDOM_LIMIT)
        .load(&mut conn)?;
    Ok(Json(into_responses(into_recipes(rows)?)))
}
