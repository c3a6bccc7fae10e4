use super::{FavoriteResponse, FAVORITE_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::{FavoriteRow, FavoriteValues};
use crate::schema::favorites;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::guard::DUPLICATE_FAVORITE;
use kitem_core::model::Favorite;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema, Default)]
pub struct UpdateFavoriteRequest {
    pub id_usuario: Option<i32>,
    pub id_receita: Option<i32>,
}

/// Moving a favorite onto a pair that already exists is rejected as a duplicate.
#[utoipa::path(
    put,
    path = "/api/favoritos/{id}/",
    tag = "favoritos",
    params(("id" = i32, Path, description = "Favorite ID")),
    request_body = UpdateFavoriteRequest,
    responses(
        (status = 200, description = "Favorite updated", body = FavoriteResponse),
        (status = 400, description = "Duplicate pair or unknown reference", body = ErrorResponse),
        (status = 404, description = "Favorite not found", body = ErrorResponse)
    )
)]
pub async fn update_favorite(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateFavoriteRequest>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let mut conn = pool.get()?;
    let current = favorites::table
        .find(id)
        .select(FavoriteRow::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found(FAVORITE_NOT_FOUND))?;

    let values = FavoriteValues {
        user_id: request.id_usuario.unwrap_or(current.user_id),
        recipe_id: request.id_receita.unwrap_or(current.recipe_id),
    };
    let row = diesel::update(favorites::table.find(id))
        .set(&values)
        .returning(FavoriteRow::as_returning())
        .get_result(&mut conn)
        .map_err(|e| ApiError::from(e).duplicate_as(DUPLICATE_FAVORITE))?;
    Ok(Json(Favorite::from(row).into()))
}
