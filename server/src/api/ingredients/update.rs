use super::{IngredientRequest, IngredientResponse, INGREDIENT_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::Ingredient;
use crate::schema::ingredients;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::validate::INGREDIENT_NAME;

#[utoipa::path(
    put,
    path = "/api/ingredientes/{id}/",
    tag = "ingredientes",
    params(("id" = i32, Path, description = "Ingredient ID")),
    request_body = IngredientRequest,
    responses(
        (status = 200, description = "Ingredient updated", body = IngredientResponse),
        (status = 400, description = "Blank or too long name", body = ErrorResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    )
)]
pub async fn update_ingredient(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<IngredientRequest>,
) -> Result<Json<IngredientResponse>, ApiError> {
    let name = request
        .nome
        .map(|value| INGREDIENT_NAME.check(Some(value)))
        .transpose()?;

    let mut conn = pool.get()?;
    let updated = match name {
        Some(name) => diesel::update(ingredients::table.find(id))
            .set(ingredients::name.eq(&name))
            .returning(Ingredient::as_returning())
            .get_result(&mut conn)
            .optional()?,
        None => ingredients::table
            .find(id)
            .select(Ingredient::as_select())
            .first(&mut conn)
            .optional()?,
    };

    let ingredient = updated.ok_or_else(|| ApiError::not_found(INGREDIENT_NOT_FOUND))?;
    Ok(Json(ingredient.into()))
}
