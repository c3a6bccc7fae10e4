use super::{into_responses, RecipeResponse};
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{extract::State, Json};
use kitem_core::{RecipeFilter, RecipeRepository};

#[utoipa::path(
    get,
    path = "/api/receitas/",
    tag = "receitas",
    responses(
        (status = 200, description = "All recipes", body = Vec<RecipeResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(pool): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let recipes = PgStore::new(&pool).filter_recipes(&RecipeFilter::new())?;
    Ok(Json(into_responses(recipes)))
}
