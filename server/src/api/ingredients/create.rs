use super::{IngredientRequest, IngredientResponse};
use crate::api::{ApiError, ErrorResponse};
use crate::models::Ingredient;
use crate::schema::ingredients;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use kitem_core::validate::INGREDIENT_NAME;

#[utoipa::path(
    post,
    path = "/api/ingredientes/",
    tag = "ingredientes",
    request_body = IngredientRequest,
    responses(
        (status = 201, description = "Ingredient created", body = IngredientResponse),
        (status = 400, description = "Missing, blank or too long name", body = ErrorResponse)
    )
)]
pub async fn create_ingredient(
    State(pool): State<AppState>,
    Json(request): Json<IngredientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = INGREDIENT_NAME.check(request.nome)?;

    let mut conn = pool.get()?;
    let ingredient: Ingredient = diesel::insert_into(ingredients::table)
        .values(ingredients::name.eq(&name))
        .returning(Ingredient::as_returning())
        .get_result(&mut conn)?;
    Ok((StatusCode::CREATED, Json(IngredientResponse::from(ingredient))))
}
