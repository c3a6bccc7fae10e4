use super::{RecipeResponse, RECIPE_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use kitem_core::RecipeRepository;

#[utoipa::path(
    get,
    path = "/api/receitas/{id}/",
    tag = "receitas",
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe = PgStore::new(&pool)
        .find_recipe(id)?
        .ok_or_else(|| ApiError::not_found(RECIPE_NOT_FOUND))?;
    Ok(Json(recipe.into()))
}
