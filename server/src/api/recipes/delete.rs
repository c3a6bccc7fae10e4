use super::RECIPE_NOT_FOUND;
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use kitem_core::RecipeRepository;

/// Also deletes the recipe's ingredients, favorites and reports.
#[utoipa::path(
    delete,
    path = "/api/receitas/{id}/",
    tag = "receitas",
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !PgStore::new(&pool).delete_recipe(id)? {
        return Err(ApiError::not_found(RECIPE_NOT_FOUND));
    }
    tracing::info!(recipe_id = id, "recipe deleted");
    Ok(StatusCode::NO_CONTENT)
}
