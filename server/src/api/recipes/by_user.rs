use super::{into_responses, RecipeResponse};
use crate::api::{ApiError, ErrorResponse};
use crate::models::RecipeRow;
use crate::schema::recipes;
use crate::store::into_recipes;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;

#[utoipa::path(
    get,
    path = "/api/receitas/usuario/{user_id}/",
    tag = "receitas",
    params(("user_id" = i32, Path, description = "Owner's user ID")),
    responses(
        (status = 200, description = "Recipes owned by the user", body = Vec<RecipeResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn recipes_by_user(
    State(pool): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let mut conn = pool.get()?;
    let rows: Vec<RecipeRow> = recipes::table
        .filter(recipes::user_id.eq(user_id))
        .select(RecipeRow::as_select())
        .order(recipes::id.asc())
        .load(&mut conn)?;
    Ok(Json(into_responses(into_recipes(rows)?)))
}
