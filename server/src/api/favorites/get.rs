use super::{FavoriteResponse, FAVORITE_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::FavoriteRow;
use crate::schema::favorites;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::model::Favorite;

#[utoipa::path(
    get,
    path = "/api/favoritos/{id}/",
    tag = "favoritos",
    params(("id" = i32, Path, description = "Favorite ID")),
    responses(
        (status = 200, description = "Favorite", body = FavoriteResponse),
        (status = 404, description = "Favorite not found", body = ErrorResponse)
    )
)]
pub async fn get_favorite(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let mut conn = pool.get()?;
    let row = favorites::table
        .find(id)
        .select(FavoriteRow::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found(FAVORITE_NOT_FOUND))?;
    Ok(Json(Favorite::from(row).into()))
}
