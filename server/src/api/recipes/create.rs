use super::{RecipeRequest, RecipeResponse};
use crate::api::{ApiError, ErrorResponse};
use crate::models::{RecipeRow, RecipeValues};
use crate::schema::recipes;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use kitem_core::model::Recipe;
use kitem_core::validate::RecipeInput;

#[utoipa::path(
    post,
    path = "/api/receitas/",
    tag = "receitas",
    request_body = RecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = RecipeResponse),
        (status = 400, description = "Invalid field or unknown owner", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(pool): State<AppState>,
    Json(request): Json<RecipeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = RecipeInput::from(request).into_draft()?;

    let mut conn = pool.get()?;
    let row: RecipeRow = diesel::insert_into(recipes::table)
        .values(RecipeValues::from(&draft))
        .returning(RecipeRow::as_returning())
        .get_result(&mut conn)?;
    let recipe = Recipe::try_from(row)?;

    tracing::info!(recipe_id = recipe.id, user_id = recipe.user_id, "recipe created");
    Ok((StatusCode::CREATED, Json(RecipeResponse::from(recipe))))
}
