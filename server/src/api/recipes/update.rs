use super::{RecipeRequest, RecipeResponse, RECIPE_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::{RecipeRow, RecipeValues};
use crate::schema::recipes;
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::model::Recipe;
use kitem_core::validate::RecipeInput;
use kitem_core::RecipeRepository;

/// PUT and PATCH both apply only the supplied fields.
#[utoipa::path(
    put,
    path = "/api/receitas/{id}/",
    tag = "receitas",
    params(("id" = i32, Path, description = "Recipe ID")),
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeResponse),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<RecipeRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let current = PgStore::new(&pool)
        .find_recipe(id)?
        .ok_or_else(|| ApiError::not_found(RECIPE_NOT_FOUND))?;
    let draft = RecipeInput::from(request).apply(&current)?;

    let mut conn = pool.get()?;
    let row = diesel::update(recipes::table.find(id))
        .set(RecipeValues::from(&draft))
        .returning(RecipeRow::as_returning())
        .get_result(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found(RECIPE_NOT_FOUND))?;
    Ok(Json(Recipe::try_from(row)?.into()))
}
