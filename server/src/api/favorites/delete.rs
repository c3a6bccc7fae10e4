use super::FAVORITE_NOT_FOUND;
use crate::api::{ApiError, ErrorResponse};
use crate::store::PgStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use kitem_core::FavoriteRepository;

#[utoipa::path(
    delete,
    path = "/api/favoritos/{id}/",
    tag = "favoritos",
    params(("id" = i32, Path, description = "Favorite ID")),
    responses(
        (status = 204, description = "Favorite deleted"),
        (status = 404, description = "Favorite not found", body = ErrorResponse)
    )
)]
pub async fn delete_favorite(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !PgStore::new(&pool).delete_favorite(id)? {
        return Err(ApiError::not_found(FAVORITE_NOT_FOUND));
    }
    Ok(StatusCode::NO_CONTENT)
}
